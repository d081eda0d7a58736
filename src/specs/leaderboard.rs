// src/specs/leaderboard.rs
// Creator ranking page: one `.creator-card` per entrant inside `.creator-ranking`.
//
//   <div class="creator-ranking">
//     <div class="creator-card">
//       <div class="creator-info"><div class="name">Alice</div></div>
//       <div class="mario100-point">
//         <div class="typography typography-1"></div>
//         <div class="typography typography-2"></div>
//         ...

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::core::digits::digits_from_class_tokens;
use crate::core::html::{attrs_of, selector, text_of};
use crate::ranking::Entry;

static CARDS: LazyLock<Selector> = LazyLock::new(|| selector(".creator-ranking .creator-card"));
static NAME: LazyLock<Selector> = LazyLock::new(|| selector(".creator-info .name"));
static DIGITS: LazyLock<Selector> = LazyLock::new(|| selector(".mario100-point .typography"));

/// Extract every ranking card in document order. Position is index + 1; any rank
/// printed on the page is ignored.
pub fn parse_doc(html_doc: &str) -> Vec<Entry> {
    let doc = Html::parse_document(html_doc);

    let entries: Vec<Entry> = doc
        .select(&CARDS)
        .enumerate()
        .map(|(i, card)| {
            let name = text_of(card, &NAME);
            let score = digits_from_class_tokens(attrs_of(card, &DIGITS, "class"));
            if score.is_none() {
                logw!("card {} ({name:?}): score digits unreadable", i + 1);
            }
            Entry { position: i as u32 + 1, name, score }
        })
        .collect();

    logd!("Leaderboard: {} cards", entries.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, digits: &str) -> String {
        let sprites: String = digits
            .chars()
            .map(|d| format!(r#"<div class="typography typography-{d}"></div>"#))
            .collect();
        format!(
            r#"<div class="creator-card">
                 <div class="creator-info"><a class="name">{name}</a></div>
                 <div class="mario100-point">{sprites}</div>
               </div>"#
        )
    }

    fn page(cards: &[String]) -> String {
        format!(
            r#"<html><body><div class="creator-ranking">{}</div></body></html>"#,
            cards.concat()
        )
    }

    #[test]
    fn positions_follow_document_order() {
        let doc = page(&[card("Alice", "120"), card("Bob", "45"), card("Cara", "10")]);
        let got = parse_doc(&doc);
        assert_eq!(
            got,
            vec![
                Entry { position: 1, name: s!("Alice"), score: Some(120) },
                Entry { position: 2, name: s!("Bob"), score: Some(45) },
                Entry { position: 3, name: s!("Cara"), score: Some(10) },
            ]
        );
    }

    #[test]
    fn name_whitespace_is_preserved() {
        let doc = page(&[card(" Dee  ", "1")]);
        assert_eq!(parse_doc(&doc)[0].name, " Dee  ");
    }

    #[test]
    fn missing_digits_leave_score_unset() {
        let doc = page(&[card("Alice", ""), card("Bob", "7")]);
        let got = parse_doc(&doc);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].score, None);
        assert_eq!(got[1].score, Some(7));
    }

    #[test]
    fn cards_outside_the_ranking_are_ignored() {
        let doc = format!(
            "<html><body>{}<div class=\"creator-ranking\">{}</div></body></html>",
            card("Stray", "9"),
            card("Alice", "1")
        );
        let got = parse_doc(&doc);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "Alice");
    }

    #[test]
    fn empty_or_garbage_input_yields_nothing() {
        assert!(parse_doc("").is_empty());
        assert!(parse_doc("<<not html").is_empty());
        assert!(parse_doc("<div class=\"creator-ranking\"></div>").is_empty());
    }
}
