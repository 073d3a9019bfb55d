//! Structured-layout fallback backend — draws the invoice directly with
//! `printpdf` (v0.8 ops-based API), independent of any HTML rendering.
//!
//! Reconstructs the full document: header band, metadata band, line-items
//! table with alternating row shading, totals block, payment instructions,
//! and footer message. All branding, colors, and payment values come from
//! the [`BrandingConfig`](crate::core::BrandingConfig) in the job's
//! structured fallback data.

use printpdf::*;
use rust_decimal::Decimal;

use super::{BackendError, FallbackData, PdfBackend, PdfJob};
use crate::core::Palette;

const PT_TO_MM: f32 = 0.352778;
const PAGE_W: f32 = 595.28; // A4 in pt
const PAGE_H: f32 = 841.89;
const MARGIN: f32 = 34.0;
const CONTENT_W: f32 = PAGE_W - 2.0 * MARGIN;
// Space kept free at the bottom of every page for the footer band.
const FOOTER_RESERVE: f32 = 70.0;

const HEADER_H: f32 = 64.0;
const META_H: f32 = 56.0;
const TABLE_HEADER_H: f32 = 20.0;
const ROW_H: f32 = 18.0;
const TOTALS_ROW_H: f32 = 17.0;
const TOTALS_W: f32 = 190.0;

/// Secondary backend: direct PDF construction from structured invoice data.
#[derive(Debug, Default)]
pub struct LayoutBackend;

impl LayoutBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LayoutBackend {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn render(&self, job: &PdfJob<'_>) -> Result<Vec<u8>, BackendError> {
        let data = job.fallback.as_ref().ok_or_else(|| {
            BackendError::MissingInput("no structured fallback data provided".into())
        })?;
        Ok(render_layout(data))
    }
}

/// Resolved palette, parsed once per render.
struct Colors {
    primary: Color,
    accent: Color,
    header_bg: Color,
    header_accent: Color,
    table_header_bg: Color,
    table_alt_row: Color,
    text_dark: Color,
    text_light: Color,
    border: Color,
}

impl Colors {
    fn from_palette(palette: &Palette) -> Self {
        Self {
            primary: hex_color(&palette.primary),
            accent: hex_color(&palette.accent),
            header_bg: hex_color(&palette.header_bg),
            header_accent: hex_color(&palette.header_accent),
            table_header_bg: hex_color(&palette.table_header_bg),
            table_alt_row: hex_color(&palette.table_alt_row),
            text_dark: hex_color(&palette.text_dark),
            text_light: hex_color(&palette.text_light),
            border: hex_color(&palette.border),
        }
    }
}

fn render_layout(data: &FallbackData<'_>) -> Vec<u8> {
    let colors = Colors::from_palette(&data.config.palette);
    let mut painter = Painter::new();

    draw_header(&mut painter, data, &colors);
    draw_meta(&mut painter, data, &colors);
    draw_items_table(&mut painter, data, &colors);
    draw_totals(&mut painter, data, &colors);
    draw_payment(&mut painter, data, &colors);

    let mut doc = PdfDocument::new(&format!("Invoice {}", data.meta.number));
    doc.with_pages(painter.finish(footer_ops(data, &colors)));
    doc.save(&PdfSaveOptions::default(), &mut Vec::new())
}

// ── Sections ──────────────────────────────────────────────────────────────

fn draw_header(p: &mut Painter, data: &FallbackData<'_>, colors: &Colors) {
    let top = p.y;
    p.fill_rect(MARGIN, top, CONTENT_W, HEADER_H, &colors.header_bg);
    p.stroke_rect(MARGIN, top, CONTENT_W, HEADER_H, &colors.header_accent, 2.0);

    let company = &data.invoice.company;
    let name = if company.name.is_empty() {
        &data.config.company.name
    } else {
        &company.name
    };
    p.text(name, MARGIN + 12.0, top + 18.0, 13.0, BuiltinFont::HelveticaBold, &colors.text_dark);
    if !company.address.is_empty() {
        p.text(
            &company.address,
            MARGIN + 12.0,
            top + 32.0,
            8.0,
            BuiltinFont::Helvetica,
            &colors.text_light,
        );
    }
    p.text(
        &data.config.company.city_state_zip,
        MARGIN + 12.0,
        top + 43.0,
        8.0,
        BuiltinFont::Helvetica,
        &colors.text_light,
    );

    p.text_right(
        "INVOICE",
        MARGIN + CONTENT_W - 12.0,
        top + 14.0,
        28.0,
        BuiltinFont::HelveticaBold,
        &colors.primary,
    );

    p.y = top + HEADER_H + 8.0;
}

fn draw_meta(p: &mut Painter, data: &FallbackData<'_>, colors: &Colors) {
    let top = p.y;
    p.stroke_rect(MARGIN, top, CONTENT_W, META_H, &colors.border, 0.5);

    let customer = &data.invoice.customer;
    p.text("Bill To:", MARGIN + 10.0, top + 10.0, 9.0, BuiltinFont::HelveticaBold, &colors.text_light);
    p.text(&customer.name, MARGIN + 10.0, top + 23.0, 10.0, BuiltinFont::HelveticaBold, &colors.text_dark);
    p.text(&customer.email, MARGIN + 10.0, top + 37.0, 9.0, BuiltinFont::Helvetica, &colors.text_light);

    let meta = data.meta;
    let right_x = MARGIN + CONTENT_W * 0.58;
    let rows = [
        format!("Invoice Number: {}", meta.number),
        format!("Invoice Date: {}", meta.issue_date.format("%B %d, %Y")),
        format!("Due Date: {}", meta.due_date.format("%B %d, %Y")),
    ];
    for (i, row) in rows.iter().enumerate() {
        p.text(
            row,
            right_x,
            top + 10.0 + i as f32 * 13.0,
            9.0,
            BuiltinFont::Helvetica,
            &colors.text_dark,
        );
    }

    p.y = top + META_H + 10.0;
}

/// Column layout: description, quantity, unit price, line total.
fn column_edges() -> [f32; 5] {
    let x0 = MARGIN;
    let x1 = x0 + CONTENT_W * 0.48;
    let x2 = x1 + CONTENT_W * 0.14;
    let x3 = x2 + CONTENT_W * 0.19;
    let x4 = MARGIN + CONTENT_W;
    [x0, x1, x2, x3, x4]
}

fn draw_table_header(p: &mut Painter, colors: &Colors) {
    let [x0, _, x2, x3, x4] = column_edges();
    let top = p.y;
    p.fill_rect(x0, top, CONTENT_W, TABLE_HEADER_H, &colors.table_header_bg);
    p.stroke_rect(x0, top, CONTENT_W, TABLE_HEADER_H, &colors.border, 0.25);

    let y = top + 6.0;
    p.text("Description", x0 + 6.0, y, 10.0, BuiltinFont::HelveticaBold, &colors.text_dark);
    p.text_right("Quantity", x2 - 6.0, y, 10.0, BuiltinFont::HelveticaBold, &colors.text_dark);
    p.text_right("Unit Price", x3 - 6.0, y, 10.0, BuiltinFont::HelveticaBold, &colors.text_dark);
    p.text_right("Total", x4 - 6.0, y, 10.0, BuiltinFont::HelveticaBold, &colors.text_dark);

    p.y = top + TABLE_HEADER_H;
}

fn draw_items_table(p: &mut Painter, data: &FallbackData<'_>, colors: &Colors) {
    let [x0, _, x2, x3, x4] = column_edges();
    draw_table_header(p, colors);

    for (idx, item) in data.invoice.items.iter().enumerate() {
        if p.y + ROW_H > PAGE_H - FOOTER_RESERVE {
            p.new_page(footer_ops(data, colors));
            draw_table_header(p, colors);
        }

        let top = p.y;
        // Shade every second row (1-based: rows 2, 4, ...)
        if (idx + 1) % 2 == 0 {
            p.fill_rect(x0, top, CONTENT_W, ROW_H, &colors.table_alt_row);
        }
        p.stroke_rect(x0, top, CONTENT_W, ROW_H, &colors.border, 0.25);

        let y = top + 5.0;
        p.text(&item.name, x0 + 6.0, y, 9.0, BuiltinFont::Helvetica, &colors.text_dark);
        p.text_right(&item.quantity.to_string(), x2 - 6.0, y, 9.0, BuiltinFont::Helvetica, &colors.text_dark);
        p.text_right(&money(item.price), x3 - 6.0, y, 9.0, BuiltinFont::Helvetica, &colors.text_dark);
        p.text_right(&money(item.line_total()), x4 - 6.0, y, 9.0, BuiltinFont::Helvetica, &colors.text_dark);

        p.y = top + ROW_H;
    }

    p.y += 12.0;
}

fn draw_totals(p: &mut Painter, data: &FallbackData<'_>, colors: &Colors) {
    let block_h = 4.0 * TOTALS_ROW_H;
    if p.y + block_h > PAGE_H - FOOTER_RESERVE {
        p.new_page(footer_ops(data, colors));
    }

    let x0 = MARGIN + CONTENT_W - TOTALS_W;
    let x1 = MARGIN + CONTENT_W;
    let summary = data.summary;
    let rows = [
        ("Subtotal:".to_string(), money(summary.subtotal), false),
        (
            format!("{}:", data.config.settings.tax_label),
            money(summary.tax),
            false,
        ),
        ("Discount:".to_string(), format!("-{}", money(summary.discount)), false),
        ("Total Due:".to_string(), money(summary.total), true),
    ];

    for (label, value, highlight) in rows {
        let top = p.y;
        let bg = if highlight { &colors.accent } else { &colors.table_alt_row };
        p.fill_rect(x0, top, TOTALS_W, TOTALS_ROW_H, bg);
        p.stroke_rect(x0, top, TOTALS_W, TOTALS_ROW_H, &colors.border, 0.25);

        let (size, font) = if highlight {
            (11.0, BuiltinFont::HelveticaBold)
        } else {
            (9.0, BuiltinFont::Helvetica)
        };
        p.text(&label, x0 + 6.0, top + 4.5, size, font, &colors.text_dark);
        p.text_right(&value, x1 - 6.0, top + 4.5, size, font, &colors.text_dark);

        p.y = top + TOTALS_ROW_H;
    }

    p.y += 16.0;
}

fn draw_payment(p: &mut Painter, data: &FallbackData<'_>, colors: &Colors) {
    let payment = &data.config.payment;
    let lines = [
        format!("Bank: {}", payment.bank_name),
        format!("Account: {}", payment.account_holder),
        format!("Methods: {}", payment.methods),
    ];
    let block_h = 14.0 + lines.len() as f32 * 12.0;
    if p.y + block_h > PAGE_H - FOOTER_RESERVE {
        p.new_page(footer_ops(data, colors));
    }

    p.text(
        "Payment Instructions:",
        MARGIN,
        p.y,
        9.0,
        BuiltinFont::HelveticaBold,
        &colors.text_light,
    );
    p.y += 14.0;
    for line in &lines {
        p.text(line, MARGIN, p.y, 9.0, BuiltinFont::Helvetica, &colors.text_light);
        p.y += 12.0;
    }
}

/// Footer band drawn at the bottom of every page: the configured footer
/// message centered, payment terms bottom-left.
fn footer_ops(data: &FallbackData<'_>, colors: &Colors) -> Vec<Op> {
    let mut ops = Vec::new();
    let message = &data.config.footer_message;
    let msg_x = PAGE_W / 2.0 - approx_text_width(message, 9.0) / 2.0;
    text_ops(
        &mut ops,
        message,
        msg_x,
        PAGE_H - 32.0,
        9.0,
        BuiltinFont::HelveticaOblique,
        &colors.text_light,
    );
    let terms = format!(
        "Net {} day payment terms",
        data.config.settings.default_due_days
    );
    text_ops(
        &mut ops,
        &terms,
        MARGIN,
        PAGE_H - 16.0,
        7.0,
        BuiltinFont::Helvetica,
        &colors.text_light,
    );
    ops
}

// ── Painter ───────────────────────────────────────────────────────────────

/// Accumulates ops for the current page; `y` is the cursor measured from
/// the page top (converted to the PDF's bottom-left origin at draw time).
struct Painter {
    pages: Vec<PdfPage>,
    ops: Vec<Op>,
    y: f32,
}

impl Painter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: MARGIN,
        }
    }

    fn new_page(&mut self, footer: Vec<Op>) {
        let mut ops = std::mem::take(&mut self.ops);
        ops.extend(footer);
        self.pages
            .push(PdfPage::new(Mm(PAGE_W * PT_TO_MM), Mm(PAGE_H * PT_TO_MM), ops));
        self.y = MARGIN;
    }

    fn finish(mut self, footer: Vec<Op>) -> Vec<PdfPage> {
        self.new_page(footer);
        self.pages
    }

    fn fill_rect(&mut self, x: f32, y_top: f32, w: f32, h: f32, color: &Color) {
        let (y0, y1) = (PAGE_H - y_top - h, PAGE_H - y_top);
        self.ops.push(Op::SetFillColor { col: color.clone() });
        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing {
                    points: rect_points(x, y0, x + w, y1),
                }],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    fn stroke_rect(&mut self, x: f32, y_top: f32, w: f32, h: f32, color: &Color, width: f32) {
        let (y0, y1) = (PAGE_H - y_top - h, PAGE_H - y_top);
        self.ops.push(Op::SetOutlineColor { col: color.clone() });
        self.ops.push(Op::SetOutlineThickness { pt: Pt(width) });
        self.ops.push(Op::DrawLine {
            line: Line {
                points: rect_points(x, y0, x + w, y1),
                is_closed: true,
            },
        });
    }

    fn text(
        &mut self,
        text: &str,
        x: f32,
        y_top: f32,
        size: f32,
        font: BuiltinFont,
        color: &Color,
    ) {
        text_ops(&mut self.ops, text, x, y_top, size, font, color);
    }

    fn text_right(
        &mut self,
        text: &str,
        right_x: f32,
        y_top: f32,
        size: f32,
        font: BuiltinFont,
        color: &Color,
    ) {
        let x = right_x - approx_text_width(text, size);
        text_ops(&mut self.ops, text, x, y_top, size, font, color);
    }
}

fn text_ops(
    ops: &mut Vec<Op>,
    text: &str,
    x: f32,
    y_top: f32,
    size: f32,
    font: BuiltinFont,
    color: &Color,
) {
    if text.is_empty() {
        return;
    }
    // Baseline sits roughly one ascender below the top of the line.
    let baseline_y = PAGE_H - y_top - size * 0.75;

    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(x),
            y: Pt(baseline_y),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(size),
        font,
    });
    ops.push(Op::SetLineHeight { lh: Pt(size * 1.2) });
    ops.push(Op::SetFillColor { col: color.clone() });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(builtin_text(text))],
        font,
    });
    ops.push(Op::EndTextSection);
}

fn rect_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<LinePoint> {
    [(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
        .into_iter()
        .map(|(x, y)| LinePoint {
            p: Point { x: Pt(x), y: Pt(y) },
            bezier: false,
        })
        .collect()
}

/// Builtin-font metrics are not exposed, so right alignment and centering
/// use an average Helvetica glyph width.
fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

/// Builtin fonts use WinAnsi encoding; map common typographic characters to
/// ASCII and replace anything else non-ASCII.
fn builtin_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201E}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2022}' => '*',
            '\u{00A0}' => ' ',
            c if c.is_ascii() => c,
            _ => '?',
        })
        .collect()
}

fn hex_color(hex: &str) -> Color {
    let h = hex.trim().trim_start_matches('#');
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let rgb = if h.len() == 6 {
        match (channel(&h[0..2]), channel(&h[2..4]), channel(&h[4..6])) {
            (Some(r), Some(g), Some(b)) => Some((r, g, b)),
            _ => None,
        }
    } else {
        None
    };

    let (r, g, b) = rgb.unwrap_or_else(|| {
        log::warn!("invalid hex color '{hex}', using black");
        (0, 0, 0)
    });
    Color::Rgb(Rgb {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        icc_profile: None,
    })
}

/// Format a money value with 2 decimal places and thousands separators,
/// e.g. `12,345.60`.
fn money(value: Decimal) -> String {
    let raw = format!("{value:.2}");
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}.{frac_part}")
}
