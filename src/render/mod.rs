//! HTML rendering of invoices via [Tera](https://keats.github.io/tera/)
//! templates.
//!
//! Ships an embedded default template; custom template directories can be
//! loaded with [`HtmlRenderer::from_dir`]. A missing template is fatal and
//! surfaces as [`InvoiceError::Render`].

use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera};

use crate::core::{BrandingConfig, DocumentMeta, Invoice, InvoiceError, Summary};

/// Name the embedded default template is registered under.
pub const DEFAULT_TEMPLATE_NAME: &str = "invoice.html.tera";

// Embedded at compile time so the renderer works without a template
// directory on disk.
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/invoice.html.tera");

/// Binds invoice data into an HTML document.
#[derive(Debug)]
pub struct HtmlRenderer {
    tera: Tera,
    template: String,
}

impl HtmlRenderer {
    /// Renderer using the embedded default template.
    pub fn new() -> Result<Self, InvoiceError> {
        let mut tera = Tera::default();
        register_filters(&mut tera);
        tera.add_raw_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE)
            .map_err(|e| InvoiceError::Render(format!("embedded template invalid: {e}")))?;
        Ok(Self {
            tera,
            template: DEFAULT_TEMPLATE_NAME.into(),
        })
    }

    /// Renderer loading every template under `dir`, using `template` as the
    /// invoice document. Fails when the directory cannot be parsed or the
    /// named template is not present.
    pub fn from_dir(dir: &str, template: impl Into<String>) -> Result<Self, InvoiceError> {
        let mut tera = Tera::new(&format!("{dir}/**/*"))
            .map_err(|e| InvoiceError::Render(format!("failed to load templates from {dir}: {e}")))?;
        register_filters(&mut tera);

        let template = template.into();
        if !tera.get_template_names().any(|n| n == template) {
            return Err(InvoiceError::Render(format!(
                "template '{template}' not found in {dir}"
            )));
        }
        Ok(Self { tera, template })
    }

    /// Render the invoice into an HTML string.
    pub fn render(
        &self,
        invoice: &Invoice,
        summary: &Summary,
        meta: &DocumentMeta,
        config: &BrandingConfig,
    ) -> Result<String, InvoiceError> {
        let items: Vec<RenderItem> = invoice
            .items
            .iter()
            .map(|item| RenderItem {
                name: &item.name,
                quantity: item.quantity,
                price: item.price.to_string(),
                line_total: item.line_total().to_string(),
            })
            .collect();

        let mut ctx = Context::new();
        ctx.insert("company", &invoice.company);
        ctx.insert("customer", &invoice.customer);
        ctx.insert("items", &items);
        ctx.insert("summary", summary);
        ctx.insert(
            "meta",
            &RenderMeta {
                number: &meta.number,
                invoice_date: meta.issue_date.format("%B %d, %Y").to_string(),
                due_date: meta.due_date.format("%B %d, %Y").to_string(),
            },
        );
        ctx.insert("branding", config);

        self.tera
            .render(&self.template, &ctx)
            .map_err(|e| InvoiceError::Render(e.to_string()))
    }
}

#[derive(Serialize)]
struct RenderItem<'a> {
    name: &'a str,
    quantity: i64,
    price: String,
    line_total: String,
}

#[derive(Serialize)]
struct RenderMeta<'a> {
    number: &'a str,
    invoice_date: String,
    due_date: String,
}

fn register_filters(tera: &mut Tera) {
    tera.register_filter("money", money_filter);
}

/// `money` filter: formats a numeric or decimal-string value with 2 decimal
/// places, e.g. `{{ summary.total | money }}`.
fn money_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let num = match value {
        tera::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        tera::Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| tera::Error::msg(format!("money filter: '{s}' is not numeric")))?,
        _ => return Err(tera::Error::msg("money filter expects a number")),
    };
    Ok(tera::Value::String(format!("{num:.2}")))
}
