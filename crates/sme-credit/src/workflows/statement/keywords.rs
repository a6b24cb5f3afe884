//! Description keyword policy used to classify statement rows.
//!
//! Matching is a case-insensitive substring test. It is deliberately fuzzy: `RETURN` also hits
//! refund narrations and `EMI` also hits words such as `PREMIUM`. Swap the predicates here to
//! change the policy; the analyzer only depends on their signatures.

/// Narration fragments that mark a returned cheque or failed payment instruction.
pub const BOUNCE_KEYWORDS: [&str; 6] = [
    "RETURN",
    "BOUNCE",
    "REJECT",
    "RET CHQ",
    "CHQ RET",
    "NACH RETURN",
];

/// Narration fragment that marks a loan installment debit.
pub const EMI_KEYWORD: &str = "EMI";

fn contains_any(description: &str, keywords: &[&str]) -> bool {
    let upper = description.to_uppercase();
    keywords.iter().any(|keyword| upper.contains(keyword))
}

/// Returns true when the narration reads as a bounced or returned instrument.
pub fn is_bounce(description: &str) -> bool {
    contains_any(description, &BOUNCE_KEYWORDS)
}

/// Returns true when the narration reads as an EMI debit.
pub fn is_emi(description: &str) -> bool {
    contains_any(description, &[EMI_KEYWORD])
}
