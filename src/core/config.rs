use serde::{Deserialize, Serialize};

/// Static branding, payment, and styling configuration for generated
/// invoices.
///
/// Passed explicitly into the HTML renderer and the structured-layout PDF
/// backend — never read from process-wide state. Deserializable so it can be
/// loaded from a JSON/TOML file; `Default` carries sample values that should
/// be replaced with real company details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub company: CompanyBranding,
    pub payment: PaymentInfo,
    pub settings: InvoiceSettings,
    /// Closing message printed at the bottom of every invoice.
    pub footer_message: String,
    /// Terms and conditions paragraph.
    pub terms: String,
    pub palette: Palette,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            company: CompanyBranding::default(),
            payment: PaymentInfo::default(),
            settings: InvoiceSettings::default(),
            footer_message: "Thank you for your business!".into(),
            terms: "Payment is due within 30 days. Late payments may incur interest charges."
                .into(),
            palette: Palette::default(),
        }
    }
}

/// Issuer letterhead details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyBranding {
    pub name: String,
    pub address: String,
    pub city_state_zip: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Default for CompanyBranding {
    fn default() -> Self {
        Self {
            name: "Your Company Name".into(),
            address: "123 Business Street, Suite 100".into(),
            city_state_zip: "New York, NY 10001".into(),
            phone: "+1 (555) 123-4567".into(),
            email: "info@yourcompany.com".into(),
            website: "www.yourcompany.com".into(),
        }
    }
}

/// Payment details for the instructions paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub routing_number: String,
    pub swift_code: String,
    /// Accepted payment methods, comma-separated display text.
    pub methods: String,
}

impl Default for PaymentInfo {
    fn default() -> Self {
        Self {
            bank_name: "Your Bank Name".into(),
            account_holder: "Your Company Name".into(),
            account_number: "****1234".into(),
            routing_number: "****5678".into(),
            swift_code: "SWIFTCODE".into(),
            methods: "Bank Transfer, Credit Card, Check".into(),
        }
    }
}

/// Document-level invoice settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceSettings {
    /// Payment terms in days (Net 30 by default).
    pub default_due_days: i64,
    /// ISO 4217 display currency.
    pub currency: String,
    /// Label for the tax row, e.g. "Sales Tax" or "VAT".
    pub tax_label: String,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            default_due_days: 30,
            currency: "USD".into(),
            tax_label: "Sales Tax".into(),
        }
    }
}

/// Color scheme as `#rrggbb` hex strings, shared by the HTML template and
/// the structured PDF layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub header_bg: String,
    pub header_accent: String,
    pub table_header_bg: String,
    pub table_alt_row: String,
    pub text_dark: String,
    pub text_light: String,
    pub border: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1f3c88".into(),
            secondary: "#2e86de".into(),
            accent: "#ffb703".into(),
            header_bg: "#f8f9fa".into(),
            header_accent: "#1f3c88".into(),
            table_header_bg: "#f4f6f9".into(),
            table_alt_row: "#f9fafb".into(),
            text_dark: "#1a1a1a".into(),
            text_light: "#666666".into(),
            border: "#dddddd".into(),
        }
    }
}
