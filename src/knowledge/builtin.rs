//! Built-in response tables

use super::{KeyedReply, PhraseAction, PhraseTrigger, TopicEntry};
use crate::quiz::QuizQuestion;

fn topic(key: &str, responses: &[&str]) -> TopicEntry {
    TopicEntry {
        key: key.to_string(),
        responses: responses.iter().map(|r| r.to_string()).collect(),
    }
}

fn reply(key: &str, reply: &str) -> KeyedReply {
    KeyedReply {
        key: key.to_string(),
        reply: reply.to_string(),
    }
}

fn phrase(key: &str, action: PhraseAction) -> PhraseTrigger {
    PhraseTrigger {
        key: key.to_string(),
        action,
    }
}

fn question(prompt: &str, options: [&str; 4], correct: usize) -> QuizQuestion {
    QuizQuestion::new(prompt, options.iter().map(|o| o.to_string()).collect(), correct)
}

pub(super) fn topics() -> Vec<TopicEntry> {
    vec![
        topic(
            "phishing",
            &[
                "Phishing is a cyberattack where scammers impersonate trusted organisations to steal your details.",
                "Be cautious with emails that urge you to click links or act immediately.",
                "Always verify the sender's address and avoid suspicious links.",
            ],
        ),
        topic(
            "password",
            &[
                "A strong password mixes upper and lower case letters, numbers and symbols.",
                "Avoid reusing the same password across different sites.",
                "Use a password manager to generate and store your credentials.",
            ],
        ),
        topic(
            "scam",
            &[
                "Online scams trick people through deception, often promising something too good to be true.",
                "Scams often play on emotion and urgency so you act before you think.",
                "Be skeptical of job offers or sellers that ask for payment up front.",
            ],
        ),
        topic(
            "privacy",
            &[
                "Online privacy means staying in control of who sees your personal data.",
                "Review app permissions regularly and avoid oversharing on social media.",
                "Use a VPN and end-to-end encrypted apps for better privacy.",
            ],
        ),
        topic(
            "browsing",
            &[
                "Safe browsing starts with sticking to secure HTTPS sites.",
                "Avoid public Wi-Fi for banking or other sensitive transactions.",
                "Use extensions that block trackers, and clear your cache regularly.",
            ],
        ),
    ]
}

pub(super) fn casual() -> Vec<KeyedReply> {
    vec![
        reply("how are you", "I'm doing great and ready to help you stay safe online!"),
        reply(
            "what is your purpose",
            "My purpose is to raise cybersecurity awareness through friendly tips.",
        ),
        reply(
            "what can i ask",
            "You can ask about phishing, scams, passwords, privacy, browsing and more.",
        ),
        reply("who made you", "I was built as a learning project on cybersecurity education."),
        reply(
            "how do you help",
            "I help by explaining cybersecurity risks and the habits that keep you safe.",
        ),
    ]
}

pub(super) fn sentiments() -> Vec<KeyedReply> {
    vec![
        reply(
            "worried",
            "It's okay to feel worried. Let's look at how to stay safe together.",
        ),
        reply(
            "frustrated",
            "I understand. Cybersecurity can be tricky, but I'm here to help.",
        ),
        reply("curious", "Curiosity is great! Let's learn together."),
    ]
}

pub(super) fn phrases() -> Vec<PhraseTrigger> {
    vec![
        phrase("show me tips", PhraseAction::ShowMenu),
        phrase(
            "tell me something useful",
            PhraseAction::Reply("Always use multi-factor authentication when it's available.".to_string()),
        ),
        phrase(
            "give me advice",
            PhraseAction::Reply("Keep your software updated to patch security vulnerabilities.".to_string()),
        ),
        phrase(
            "what should i do",
            PhraseAction::Reply("Let's start by checking your password habits.".to_string()),
        ),
        phrase(
            "i feel unsafe online",
            PhraseAction::Reply("That's understandable. Start by reviewing your privacy settings.".to_string()),
        ),
        phrase(
            "what's next",
            PhraseAction::Reply("Try asking about 'phishing' or 'safe browsing'!".to_string()),
        ),
    ]
}

pub(super) fn quiz() -> Vec<QuizQuestion> {
    vec![
        question(
            "What is phishing?",
            [
                "A technique to improve password strength",
                "A scam pretending to be a trusted entity",
                "A type of VPN",
                "A software update method",
            ],
            1,
        ),
        question(
            "What makes a strong password?",
            [
                "Your birthday",
                "Just letters",
                "Combination of letters, numbers & symbols",
                "Repeating your name",
            ],
            2,
        ),
        question(
            "What is a VPN used for?",
            [
                "Speeding up internet",
                "Sharing files",
                "Protecting online privacy",
                "Blocking ads",
            ],
            2,
        ),
        question(
            "Which of these is an online scam?",
            [
                "Job offer asking for money upfront",
                "Government news",
                "Antivirus updates",
                "Browser refresh",
            ],
            0,
        ),
        question(
            "What should you do before clicking a link?",
            [
                "Hover to preview it",
                "Ignore it",
                "Click immediately",
                "Forward it to others",
            ],
            0,
        ),
        question(
            "What is 2FA?",
            [
                "Two Friends Authentication",
                "Two-Factor Authentication",
                "2-Files Analyzer",
                "None of the above",
            ],
            1,
        ),
        question(
            "What is malware?",
            [
                "A safe app",
                "Software that protects you",
                "Malicious software",
                "Your browser extension",
            ],
            2,
        ),
        question(
            "How often should you update your password?",
            ["Never", "Every 2-3 months", "Once a year", "Only when hacked"],
            1,
        ),
        question(
            "Why avoid public Wi-Fi for banking?",
            [
                "It's slow",
                "It drains your battery",
                "It's insecure and easy to intercept",
                "It costs money",
            ],
            2,
        ),
        question(
            "What's a common sign of a scam email?",
            [
                "Perfect grammar",
                "Asking for urgent money",
                "Sent from a friend",
                "Looks like an ad",
            ],
            1,
        ),
    ]
}
