/// Input control of a form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
    Integer,
    Decimal,
    /// `YYYY-MM-DD`
    Date,
    /// Fixed option list, stored as the option string
    Select(&'static [&'static str]),
    /// Product lines: product, quantity, unit price
    LineItems,
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Integer | FieldKind::Decimal => "number",
            FieldKind::Date => "date",
            _ => "text",
        }
    }
}

/// One form field.
///
/// `name` is the JSON path of the value; a dotted name such as
/// `customer.name` writes into an embedded object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDef {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    pub fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Decimal)
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn select(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn line_items(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::LineItems)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Embedded object the field writes into, e.g. `customer` for `customer.name`
    pub fn parent(&self) -> Option<&'static str> {
        self.name.rsplit_once('.').map(|(parent, _)| parent)
    }
}
