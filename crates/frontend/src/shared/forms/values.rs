use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use std::collections::{HashMap, HashSet};

use super::fields::{FieldDef, FieldKind};

/// Editable product line; numbers stay strings until submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemDraft {
    pub product: String,
    pub quantity: String,
    pub unit_price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Field name; empty when the error concerns the whole form
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw input of a form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    text: HashMap<&'static str, String>,
    items: HashMap<&'static str, Vec<LineItemDraft>>,
}

impl FormValues {
    /// Blank form; a select starts on its first option
    pub fn empty(fields: &[FieldDef]) -> Self {
        let mut values = Self::default();
        for field in fields {
            match field.kind {
                FieldKind::LineItems => {
                    values.items.insert(field.name, Vec::new());
                }
                FieldKind::Select(options) => {
                    let first = options.first().map(|o| o.to_string()).unwrap_or_default();
                    values.text.insert(field.name, first);
                }
                _ => {
                    values.text.insert(field.name, String::new());
                }
            }
        }
        values
    }

    /// Prefill from an entity serialized to JSON
    pub fn from_json(fields: &[FieldDef], source: &Value) -> Self {
        let mut values = Self::empty(fields);
        for field in fields {
            let Some(raw) = get_path(source, field.name) else {
                continue;
            };
            match field.kind {
                FieldKind::LineItems => {
                    values.items.insert(field.name, drafts_from_json(raw));
                }
                FieldKind::Date => {
                    let text = scalar_text(raw);
                    let day = text.split('T').next().unwrap_or_default().to_string();
                    values.text.insert(field.name, day);
                }
                _ => {
                    values.text.insert(field.name, scalar_text(raw));
                }
            }
        }
        values
    }

    pub fn text(&self, name: &str) -> String {
        self.text.get(name).cloned().unwrap_or_default()
    }

    pub fn set_text(&mut self, name: &'static str, value: String) {
        self.text.insert(name, value);
    }

    pub fn items(&self, name: &str) -> Vec<LineItemDraft> {
        self.items.get(name).cloned().unwrap_or_default()
    }

    pub fn push_item(&mut self, name: &'static str) {
        self.items.entry(name).or_default().push(LineItemDraft::default());
    }

    pub fn remove_item(&mut self, name: &'static str, index: usize) {
        if let Some(items) = self.items.get_mut(name) {
            if index < items.len() {
                items.remove(index);
            }
        }
    }

    pub fn update_item(&mut self, name: &'static str, index: usize, f: impl FnOnce(&mut LineItemDraft)) {
        if let Some(item) = self.items.get_mut(name).and_then(|items| items.get_mut(index)) {
            f(item);
        }
    }

    /// Write the form over `base` (an entity as JSON, or `{}` for a new one).
    ///
    /// Empty optional fields are removed so the entity falls back to its
    /// defaults, and an embedded object whose fields are all empty is
    /// dropped as a whole. Every failing field is reported.
    pub fn apply(&self, fields: &[FieldDef], base: Value) -> Result<Value, Vec<FieldError>> {
        let mut root = match base {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let mut errors = Vec::new();
        let mut filled_parents: HashSet<&'static str> = HashSet::new();

        for field in fields {
            match self.field_json(field) {
                Ok(Some(value)) => {
                    if let Some(parent) = field.parent() {
                        filled_parents.insert(parent);
                    }
                    set_path(&mut root, field.name, value);
                }
                Ok(None) => remove_path(&mut root, field.name),
                Err(e) => errors.push(e),
            }
        }

        for parent in fields.iter().filter_map(FieldDef::parent) {
            if !filled_parents.contains(parent) {
                remove_path(&mut root, parent);
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(root))
        } else {
            Err(errors)
        }
    }

    /// `apply` followed by deserialization into the entity type
    pub fn parse<R: DeserializeOwned>(&self, fields: &[FieldDef], base: Value) -> Result<R, Vec<FieldError>> {
        let json = self.apply(fields, base)?;
        serde_json::from_value(json)
            .map_err(|e| vec![FieldError::new("", format!("Invalid form data: {}", e))])
    }

    /// JSON value of one field; `None` when an optional field is empty
    fn field_json(&self, field: &FieldDef) -> Result<Option<Value>, FieldError> {
        if field.kind == FieldKind::LineItems {
            let items = line_items_json(field, &self.items(field.name))?;
            if items.is_empty() && field.required {
                return Err(FieldError::new(field.name, "Add at least one product"));
            }
            return Ok(Some(Value::Array(items)));
        }

        let raw = self.text(field.name);
        let text = raw.trim();
        if text.is_empty() {
            if field.required {
                return Err(FieldError::new(field.name, format!("{} is required", field.label)));
            }
            return Ok(None);
        }

        let value = match field.kind {
            FieldKind::Integer => {
                let n: i64 = text.parse().map_err(|_| {
                    FieldError::new(field.name, format!("{} must be a whole number", field.label))
                })?;
                Value::Number(n.into())
            }
            FieldKind::Decimal => {
                let n = parse_decimal(text).ok_or_else(|| {
                    FieldError::new(field.name, format!("{} must be a number", field.label))
                })?;
                Value::Number(n)
            }
            FieldKind::Select(options) if !options.contains(&text) => {
                return Err(FieldError::new(
                    field.name,
                    format!("{} must be one of: {}", field.label, options.join(", ")),
                ));
            }
            _ => Value::String(text.to_string()),
        };
        Ok(Some(value))
    }
}

fn parse_decimal(text: &str) -> Option<Number> {
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

fn line_items_json(field: &FieldDef, drafts: &[LineItemDraft]) -> Result<Vec<Value>, FieldError> {
    let mut items = Vec::new();
    for (i, draft) in drafts.iter().enumerate() {
        let product = draft.product.trim();
        let quantity = draft.quantity.trim();
        let unit_price = draft.unit_price.trim();
        if product.is_empty() && quantity.is_empty() && unit_price.is_empty() {
            continue;
        }
        let line = i + 1;
        if product.is_empty() {
            return Err(FieldError::new(field.name, format!("Line {}: product is required", line)));
        }
        let quantity: u32 = quantity.parse().map_err(|_| {
            FieldError::new(field.name, format!("Line {}: quantity must be a whole number", line))
        })?;
        let unit_price = if unit_price.is_empty() {
            Number::from(0)
        } else {
            parse_decimal(unit_price).ok_or_else(|| {
                FieldError::new(field.name, format!("Line {}: unit price must be a number", line))
            })?
        };

        let mut map = Map::new();
        map.insert("product".into(), Value::String(product.to_string()));
        map.insert("quantity".into(), Value::Number(quantity.into()));
        map.insert("unit_price".into(), Value::Number(unit_price));
        items.push(Value::Object(map));
    }
    Ok(items)
}

fn drafts_from_json(raw: &Value) -> Vec<LineItemDraft> {
    raw.as_array()
        .map(|rows| {
            rows.iter()
                .map(|row| LineItemDraft {
                    product: row.get("product").map(scalar_text).unwrap_or_default(),
                    quantity: row.get("quantity").map(scalar_text).unwrap_or_default(),
                    unit_price: row.get("unit_price").map(scalar_text).unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, part| current.get(part))
}

fn set_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            root.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let child = root
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(map) = child {
                set_path(map, rest, value);
            }
        }
    }
}

fn remove_path(root: &mut Map<String, Value>, path: &str) {
    match path.split_once('.') {
        None => {
            root.remove(path);
        }
        Some((head, rest)) => {
            if let Some(Value::Object(map)) = root.get_mut(head) {
                remove_path(map, rest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_vendor::aggregate::Vendor;
    use contracts::domain::a005_purchase::aggregate::Purchase;
    use contracts::domain::a006_sale::aggregate::{PaymentMode, Sale};
    use serde_json::json;

    fn vendor_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("name", "Name").required(),
            FieldDef::text("contact_person", "Contact person"),
            FieldDef::email("email", "Email"),
            FieldDef::text("phone", "Phone"),
        ]
    }

    fn sale_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("bill_id", "Bill no.").required(),
            FieldDef::text("customer.name", "Customer"),
            FieldDef::text("customer.phone", "Customer phone"),
            FieldDef::text("inventory", "Inventory").required(),
            FieldDef::date("sale_date", "Date"),
            FieldDef::select("payment_mode", "Payment", PaymentMode::options()),
            FieldDef::line_items("products", "Products"),
        ]
    }

    #[test]
    fn new_vendor_from_form() {
        let fields = vendor_fields();
        let mut values = FormValues::empty(&fields);
        values.set_text("name", "  Acme Co ".into());
        values.set_text("phone", "555-0100".into());

        let vendor: Vendor = values.parse(&fields, json!({})).unwrap();
        assert_eq!(vendor.name, "Acme Co");
        assert_eq!(vendor.phone, "555-0100");
        assert_eq!(vendor.email, None);
    }

    #[test]
    fn required_field_is_reported() {
        let fields = vendor_fields();
        let values = FormValues::empty(&fields);
        let errors = values.apply(&fields, json!({})).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "Name is required")]);
    }

    #[test]
    fn edit_prefills_and_clears_optional_fields() {
        let fields = vendor_fields();
        let existing = json!({"name": "Acme Co", "email": "sales@acme.test", "gst_number": "GST-1"});
        let mut values = FormValues::from_json(&fields, &existing);
        assert_eq!(values.text("email"), "sales@acme.test");

        values.set_text("email", String::new());
        let vendor: Vendor = values.parse(&fields, existing).unwrap();
        assert_eq!(vendor.email, None);
        // fields outside the form survive the edit
        assert_eq!(vendor.gst_number.as_deref(), Some("GST-1"));
    }

    #[test]
    fn dotted_names_build_embedded_customer() {
        let fields = sale_fields();
        let mut values = FormValues::empty(&fields);
        values.set_text("bill_id", "B-1".into());
        values.set_text("inventory", "Main".into());
        values.set_text("customer.name", "Jane Doe".into());
        values.set_text("payment_mode", "upi".into());

        let sale: Sale = values.parse(&fields, json!({})).unwrap();
        assert_eq!(sale.customer_name(), "Jane Doe");
        assert_eq!(sale.payment_mode, PaymentMode::Upi);
    }

    #[test]
    fn empty_embedded_object_is_dropped() {
        let fields = sale_fields();
        let existing = json!({
            "bill_id": "B-1",
            "inventory": "Main",
            "customer": {"id": "7d7f1c64-0b8f-4a43-9b7c-2f7f5d0c1a11", "name": "Jane Doe"}
        });
        let mut values = FormValues::from_json(&fields, &existing);
        values.set_text("customer.name", String::new());

        let sale: Sale = values.parse(&fields, existing).unwrap();
        assert!(sale.customer.is_none());
    }

    #[test]
    fn line_items_are_parsed_and_blank_rows_skipped() {
        let fields = vec![
            FieldDef::text("mr_id", "MR no.").required(),
            FieldDef::text("vendor", "Vendor").required(),
            FieldDef::text("inventory", "Inventory").required(),
            FieldDef::line_items("products", "Products").required(),
        ];
        let mut values = FormValues::empty(&fields);
        values.set_text("mr_id", "MR-9".into());
        values.set_text("vendor", "Acme Co".into());
        values.set_text("inventory", "Main".into());
        values.push_item("products");
        values.push_item("products");
        values.update_item("products", 0, |item| {
            item.product = "Bolt".into();
            item.quantity = "4".into();
            item.unit_price = "2.5".into();
        });

        let purchase: Purchase = values.parse(&fields, json!({})).unwrap();
        assert_eq!(purchase.products.len(), 1);
        assert_eq!(purchase.total(), 10.0);
    }

    #[test]
    fn bad_numbers_are_reported_per_field() {
        let fields = vec![
            FieldDef::text("name", "Name").required(),
            FieldDef::integer("capacity", "Capacity"),
            FieldDef::decimal("price", "Price"),
            FieldDef::line_items("products", "Products").required(),
        ];
        let mut values = FormValues::empty(&fields);
        values.set_text("name", "Main".into());
        values.set_text("capacity", "12.5".into());
        values.set_text("price", "abc".into());

        let errors = values.apply(&fields, json!({})).unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Capacity must be a whole number",
                "Price must be a number",
                "Add at least one product"
            ]
        );
    }

    #[test]
    fn dates_are_cut_to_the_day() {
        let fields = vec![FieldDef::date("sale_date", "Date")];
        let values = FormValues::from_json(&fields, &json!({"sale_date": "2024-03-15T10:00:00Z"}));
        assert_eq!(values.text("sale_date"), "2024-03-15");
    }
}
