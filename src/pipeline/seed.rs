//! Demo seed tickets
//!
//! A small batch of representative tickets covering every summary category,
//! loaded at startup unless disabled via config or `--no-seed`.

/// The demo ticket texts, in submission order (ticket 1 first).
pub const DEMO_TICKETS: [&str; 8] = [
    "I tried to pay my bill online but your site kept giving error 500, and the chatbot was no help at all. This is the third time this month!",
    "Just wanted to let you know the delivery was late but it arrived safely. Great packaging! Thanks for the excellent service.",
    "Reset my password 3 times, still can't get access. Please fix this ASAP or I'll move to another provider! This is unacceptable and I'm considering legal action.",
    "How do I set up automatic billing? I couldn't find the option in my account settings. Would appreciate some help with this.",
    "I was charged twice for the same order (#12345). I need a refund immediately! My bank statement shows duplicate charges from your company.",
    "Your product exceeded my expectations! The quality is amazing and shipping was super fast. Will definitely order again and recommend to friends!",
    "My package tracking says it was delivered yesterday but I never received it. Where is my order? I've been waiting for 2 weeks now.",
    "The mobile app keeps crashing whenever I try to view my order history. Tried reinstalling but the problem persists. Can you help?",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::TicketStore;

    #[test]
    fn test_seed_populates_store_in_order() {
        let store = TicketStore::with_texts(DEMO_TICKETS);
        assert_eq!(store.len(), 8);
        // Newest first: ticket 8 leads the list, ticket 1 closes it.
        let list = store.list();
        assert_eq!(list[0].id, 8);
        assert_eq!(list[7].id, 1);
        assert!(list[7].text.starts_with("I tried to pay my bill"));
    }
}
