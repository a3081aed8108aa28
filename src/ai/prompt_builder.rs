/// Persona and company facts sent ahead of every customer question.
pub const SYSTEM_PROMPT: &str = "你是一個專業、友善的企業客服助手。

你的職責是：
1. 用繁體中文回答客戶的問題
2. 提供關於公司服務和產品的信息
3. 引導客戶通過聯絡表單提交詢問
4. 保持專業和禮貌的語氣
5. 如果不知道答案，誠實地說出並建議通過聯絡表單聯繫我們

公司信息：
- 我們提供高品質的產品和服務
- 支持多種服務包括產品銷售、技術支援和客戶服務
- 營業時間：周一至周五 9:00-18:00
- 聯絡郵箱：contact@company.com";

/// Label placed between the system prompt and the customer's message.
pub const QUESTION_LABEL: &str = "客戶提問：";

/// Builds the single-turn prompt: system instruction, blank line, then the
/// labelled customer question. The message is passed through untouched.
#[must_use]
pub fn build_prompt(message: &str) -> String {
    format!("{SYSTEM_PROMPT}\n\n{QUESTION_LABEL}{message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_layout() {
        let prompt = build_prompt("  營業時間？ ");
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.ends_with("\n\n客戶提問：  營業時間？ "));
    }

    #[test]
    fn test_system_prompt_has_company_facts() {
        assert!(SYSTEM_PROMPT.contains("contact@company.com"));
        assert!(SYSTEM_PROMPT.contains("9:00-18:00"));
    }
}
