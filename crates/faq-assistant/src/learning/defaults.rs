//! Built-in knowledge shipped with the assistant

use crate::types::{Answer, KnowledgeBase};

fn by_city(entries: [(&str, &str); 4]) -> Answer {
    Answer::Topic(
        entries
            .into_iter()
            .map(|(city, text)| (city.to_string(), text.to_string()))
            .collect(),
    )
}

/// Knowledge used when no persisted store exists yet
pub fn default_knowledge() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    kb.insert("hello", "Hello! How may I assist you today?");
    kb.insert("goodbye", "Goodbye! Wishing you a great day ahead!");
    kb.insert(
        "account types",
        "We offer Savings, Current, Fixed Deposit, and Business Accounts. Let me know if you need details about any specific type.",
    );
    kb.insert(
        "loan types",
        "Available loans include Home, Personal, Auto, and Education Loans. Each loan has different eligibility and terms.",
    );
    kb.insert(
        "interest rates",
        "Interest rates vary: Savings accounts (2%-5%), Loans depend on the type and tenure, contact support for exact loan rates.",
    );
    kb.insert(
        "atm locations",
        by_city([
            ("Colombo", "ATM is located in Colombo 1, Colombo 2, and Colombo 7."),
            ("Kandy", "ATM is located at Kandy Town and Peradeniya."),
            ("Galle", "ATM is located at Galle Fort and Galle Town."),
            ("Jaffna", "ATM is located in Jaffna City and Chunnakam."),
        ]),
    );
    kb.insert(
        "branch locations",
        by_city([
            ("Colombo", "We have branches in Colombo 1, Colombo 2, and Colombo 7."),
            ("Kandy", "We have branches in Kandy Town and Peradeniya."),
            ("Galle", "We have branches in Galle Fort and Galle Town."),
            ("Jaffna", "We have branches in Jaffna City and Chunnakam."),
        ]),
    );
    kb.insert(
        "how to apply for a loan",
        "You can apply online via our website or visit any of our branches for assistance.",
    );
    kb.insert(
        "banking hours",
        "Our banking hours are from 9 AM to 4 PM, Monday to Friday.",
    );
    kb.insert(
        "contact support",
        "You can call us at 123-456-789 or email support@ourbank.com.",
    );
    kb.insert(
        "fees",
        "Fees vary depending on your account type. Please contact customer support for full details.",
    );
    kb.insert(
        "opening a savings account",
        "Visit any branch or apply online to open a savings account. A minimum deposit is required.",
    );
    kb.insert(
        "fixed deposit",
        "A fixed deposit account earns higher interest. Terms range from 6 months to 5 years.",
    );
    kb
}
