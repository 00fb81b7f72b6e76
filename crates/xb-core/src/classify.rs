//! Keyword classification of free-text expense messages.
//!
//! Messages are short and informal, so substring presence is the whole
//! signal. Ambiguity is resolved by the fixed priority order of the
//! tables below; the order must not change or stored history stops
//! matching fresh classifications.

use crate::expense::Category;

/// Ordered place keywords. The first substring hit wins. A `Some`
/// canonical label collapses spelling variants onto one merchant name;
/// `None` means the keyword is capitalized as its own label.
const PLACE_KEYWORDS: &[(&str, Option<&str>)] = &[
    ("korzinka", Some("Korzinka")),
    ("karzinka", Some("Korzinka")),
    ("makro", None),
    ("havas", None),
    ("bozor", None),
    ("internet", None),
    ("benzin", None),
    ("transport", None),
    ("taksi", None),
    ("aptek", Some("Dorixona")),
    ("dorixona", Some("Dorixona")),
];

/// Ordered category keyword groups; the first group with any hit wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &["korzinka", "karzinka", "bozor", "ovqat", "makro", "havas"],
    ),
    (Category::Internet, &["internet", "wifi", "tarif"]),
    (
        Category::Transport,
        &["benzin", "zapravka", "taksi", "transport", "metro", "avtobus"],
    ),
    (Category::Pharmacy, &["aptek", "dorixona", "dori"]),
];

/// Merchant/vendor label inferred from the text, if any keyword occurs.
pub fn guess_place(text: &str) -> Option<String> {
    let t = text.to_lowercase();
    for (keyword, canonical) in PLACE_KEYWORDS {
        if t.contains(keyword) {
            return Some(match canonical {
                Some(label) => (*label).to_string(),
                None => capitalize(keyword),
            });
        }
    }
    None
}

/// Spending category inferred from the text. Total over all inputs:
/// anything the keyword groups miss is `Other`.
pub fn guess_category(text: &str) -> Category {
    let t = text.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| t.contains(k)) {
            return *category;
        }
    }
    Category::Other
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
