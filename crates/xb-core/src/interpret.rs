use chrono::NaiveDate;

use crate::{
    amount::parse_amount,
    classify::{guess_category, guess_place},
    domain::UserId,
    expense::ExpenseRecord,
};

/// Turn one raw message into an expense record.
///
/// The amount decides everything: without one there is no record, no
/// matter which place or category keywords appear. That outcome is the
/// normal case for unrelated chatter, so it is an `Option`, never an
/// error.
pub fn interpret(user_id: UserId, text: &str, today: NaiveDate) -> Option<ExpenseRecord> {
    let amount = parse_amount(text)?;

    Some(ExpenseRecord {
        user_id,
        date: today,
        place: guess_place(text),
        category: guess_category(text),
        amount,
        note: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::Category;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn builds_a_fully_populated_record() {
        let rec = interpret(UserId(7), "Korzinka 500k bozorlik", today()).unwrap();
        assert_eq!(rec.user_id, UserId(7));
        assert_eq!(rec.date, today());
        assert_eq!(rec.place, Some("Korzinka".to_string()));
        assert_eq!(rec.category, Category::Food);
        assert_eq!(rec.amount, 500_000);
        // Note keeps the original casing for audit.
        assert_eq!(rec.note, "Korzinka 500k bozorlik");
    }

    #[test]
    fn empty_text_is_not_an_expense() {
        assert_eq!(interpret(UserId(7), "", today()), None);
    }

    #[test]
    fn keywords_without_an_amount_never_produce_a_record() {
        assert_eq!(interpret(UserId(7), "korzinka bozorlik", today()), None);
        assert_eq!(interpret(UserId(7), "aptek", today()), None);
    }

    #[test]
    fn place_may_be_absent_while_category_resolves() {
        let rec = interpret(UserId(7), "ovqat 12k", today()).unwrap();
        assert_eq!(rec.place, None);
        assert_eq!(rec.category, Category::Food);
    }
}
