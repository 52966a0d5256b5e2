//! Glyph widths for the standard Type1 faces, in 1/1000 em.
//!
//! Only the printable ASCII range is tabulated. Punctuation from the WinAnsi high
//! block has a few explicit entries; anything else measures as `fallback`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_ASCII: [u16; 95] = [600; 95];

#[derive(Debug)]
pub(crate) struct StandardFace {
    pub base_font: &'static str,
    ascii: &'static [u16; 95],
    bold: bool,
    monospace: bool,
    fallback: u16,
}

impl StandardFace {
    pub fn width(&self, code: u8) -> u16 {
        match code {
            0x20..=0x7E => self.ascii[(code - 0x20) as usize],
            _ if self.monospace => self.fallback,
            0x95 => 350,
            0x85 | 0x97 => 1000,
            0x91 | 0x92 => if self.bold { 278 } else { 222 },
            0x93 | 0x94 => if self.bold { 500 } else { 333 },
            _ => self.fallback,
        }
    }
}

static STANDARD_FACES: Lazy<HashMap<&'static str, StandardFace>> = Lazy::new(|| {
    let faces = [
        ("Helvetica", &HELVETICA_ASCII, false),
        ("Helvetica-Oblique", &HELVETICA_ASCII, false),
        ("Helvetica-Bold", &HELVETICA_BOLD_ASCII, true),
        ("Helvetica-BoldOblique", &HELVETICA_BOLD_ASCII, true),
        ("Courier", &COURIER_ASCII, false),
        ("Courier-Oblique", &COURIER_ASCII, false),
        ("Courier-Bold", &COURIER_ASCII, true),
        ("Courier-BoldOblique", &COURIER_ASCII, true),
    ];
    faces
        .into_iter()
        .map(|(name, ascii, bold)| {
            let monospace = name.starts_with("Courier");
            let fallback = if monospace { 600 } else { 556 };
            (name, StandardFace { base_font: name, ascii, bold, monospace, fallback })
        })
        .collect()
});

pub(crate) fn standard_face(name: &str) -> Option<&'static StandardFace> {
    STANDARD_FACES.get(name)
}
