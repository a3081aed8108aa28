//! Keyword-matched fallback replies.
//!
//! Used whenever the remote model is unconfigured or fails. Matching is a
//! case-insensitive substring test over ordered keyword groups; the first
//! group that matches decides the reply, so a message that greets and asks
//! about a product gets the greeting.

/// The six fixed reply categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCategory {
    Greeting,
    Product,
    Price,
    Contact,
    Help,
    Default,
}

impl ReplyCategory {
    pub const ALL: [ReplyCategory; 6] = [
        ReplyCategory::Greeting,
        ReplyCategory::Product,
        ReplyCategory::Price,
        ReplyCategory::Contact,
        ReplyCategory::Help,
        ReplyCategory::Default,
    ];

    #[must_use]
    pub fn reply(self) -> &'static str {
        match self {
            ReplyCategory::Greeting => "你好！歡迎來到我們的服務。有什麼我可以幫你的嗎？",
            ReplyCategory::Product => "我們提供多種高品質的產品和服務。您對哪個特別感興趣？",
            ReplyCategory::Price => {
                "價格根據具體需求而定。建議你透過聯絡表單提供更多詳情，我們會給你報價。"
            }
            ReplyCategory::Contact => "您可以透過頁面上的聯絡表單與我們聯繫，我們會盡快回覆。",
            ReplyCategory::Help => {
                "我可以協助你了解我們的服務、回答常見問題，或幫你與我們的團隊聯繫。"
            }
            ReplyCategory::Default => {
                "感謝你的提問。如果你需要更多幫助，請透過聯絡表單與我們聯繫。"
            }
        }
    }
}

/// Keyword groups in priority order. Keywords are already lower-case.
const KEYWORD_GROUPS: &[(ReplyCategory, &[&str])] = &[
    (ReplyCategory::Greeting, &["你好", "hello", "hi"]),
    (ReplyCategory::Product, &["產品", "服務", "product", "service"]),
    (ReplyCategory::Price, &["價格", "費用", "price", "cost"]),
    (ReplyCategory::Contact, &["聯絡", "聯繫", "contact", "email"]),
    (ReplyCategory::Help, &["幫助", "幫忙", "help"]),
];

#[must_use]
pub fn classify(message: &str) -> ReplyCategory {
    let lowered = message.to_lowercase();

    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map_or(ReplyCategory::Default, |(category, _)| *category)
}

#[must_use]
pub fn respond(message: &str) -> &'static str {
    classify(message).reply()
}
