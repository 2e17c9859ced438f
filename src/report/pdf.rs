// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::layout::{Layout, Tone, Weight, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::{BudgetError, BudgetResult};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, Point, Rgb};

fn pdf_err<E: std::fmt::Debug>(e: E) -> BudgetError {
    BudgetError::Report(format!("{:?}", e))
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Accent => Color::Rgb(Rgb::new(0.13, 0.55, 0.13, None)),
        Tone::Body => Color::Rgb(Rgb::new(0.1, 0.1, 0.1, None)),
        Tone::Muted => Color::Rgb(Rgb::new(0.45, 0.45, 0.45, None)),
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: Weight) -> &IndirectFontRef {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
            Weight::Italic => &self.italic,
        }
    }
}

/// Renders a laid-out report into PDF bytes using the built-in Helvetica
/// family, whose WinAnsi encoding is why text is sanitized upstream.
pub fn render(layout: &Layout, title: &str) -> BudgetResult<Vec<u8>> {
    if layout.pages.is_empty() {
        return Err(BudgetError::Report("layout has no pages".into()));
    }
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_err)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?,
        italic: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(pdf_err)?,
    };

    for (i, page) in layout.pages.iter().enumerate() {
        let (page_idx, layer_idx) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), format!("Layer {}", i + 1))
        };
        let layer = doc.get_page(page_idx).get_layer(layer_idx);

        for line in &page.lines {
            layer.set_fill_color(tone_color(line.tone));
            layer.use_text(
                line.text.as_str(),
                line.size,
                Mm(line.x),
                Mm(line.y),
                fonts.get(line.weight),
            );
        }

        layer.set_outline_color(tone_color(Tone::Muted));
        layer.set_outline_thickness(0.3);
        for rule in &page.rules {
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(rule.x1), Mm(rule.y)), false),
                    (Point::new(Mm(rule.x2), Mm(rule.y)), false),
                ],
                is_closed: false,
            });
        }
    }

    doc.save_to_bytes().map_err(pdf_err)
}
