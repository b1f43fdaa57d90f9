//! Scripted FAQ replies for the site chat widget.
//!
//! Replies come from a static keyword table. Rules are checked in order and
//! the first rule with a keyword contained in the (lowercased) user text wins.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay before the widget follows a redirect reply.
pub const REDIRECT_DELAY_MS: u64 = 3_000;

pub const FALLBACK_REPLY: &str =
    "Уучлаарай, асуултыг тань ойлгосонгүй. Салбар, цагийн хуваарь, франчайз эсвэл ажлын байрны талаар асууна уу.";

const ESCALATION_REPLY: &str =
    "Танд манай ажилтан туслах нь зүйтэй байх. Холбоо барих хуудас руу шилжүүлж байна.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// What the widget should do with the bot's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplyAction {
    Reply {
        text: String,
    },
    /// Show `text`, then navigate to `to` after `after_ms`.
    Redirect {
        text: String,
        after_ms: u64,
        to: String,
    },
}

impl ReplyAction {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            ReplyAction::Reply { text } | ReplyAction::Redirect { text, .. } => text,
        }
    }

    #[must_use]
    pub fn redirect_delay(&self) -> Option<Duration> {
        match self {
            ReplyAction::Reply { .. } => None,
            ReplyAction::Redirect { after_ms, .. } => Some(Duration::from_millis(*after_ms)),
        }
    }
}

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
    redirect_to: Option<&'static str>,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["сайн байна", "сайн уу", "hello"],
        reply: "Сайн байна уу! Манай угаалгын газрын талаар юу асуух вэ?",
        redirect_to: None,
    },
    Rule {
        keywords: &["цаг", "hours", "open"],
        reply: "Манай бүх салбар өдөр бүр 08:00-00:00 цагийн хооронд ажилладаг.",
        redirect_to: None,
    },
    Rule {
        keywords: &["үнэ", "төлбөр", "price", "cost"],
        reply: "Угаалга, хатаалгын үнэ машины багтаамжаас хамаарна. Салбар дээрх үнийн самбараас харна уу.",
        redirect_to: None,
    },
    Rule {
        keywords: &["франчайз", "franchise"],
        reply: "Франчайзын нөхцөлтэй танилцуулахаар франчайз хуудас руу шилжүүлж байна.",
        redirect_to: Some("/franchise"),
    },
    Rule {
        keywords: &["ажлын байр", "ажил", "job", "career"],
        reply: "Нээлттэй ажлын байрнуудыг харуулахаар карьер хуудас руу шилжүүлж байна.",
        redirect_to: Some("/careers"),
    },
    Rule {
        keywords: &["салбар", "хаяг", "хаана", "branch", "location", "address"],
        reply: "Салбаруудын байршлыг газрын зураг дээр харуулъя.",
        redirect_to: Some("/branches"),
    },
    Rule {
        keywords: &["холбоо", "утас", "contact", "phone"],
        reply: "Холбоо барих хуудас руу шилжүүлж байна.",
        redirect_to: Some("/contact"),
    },
    Rule {
        keywords: &["баярлалаа", "thank"],
        reply: "Баярлалаа! Өөр асуух зүйл байвал бичээрэй.",
        redirect_to: None,
    },
];

/// Produces the bot's answer to `text` given the conversation so far.
///
/// After two consecutive fallback answers the user is sent to the contact
/// page instead of receiving a third.
#[must_use]
pub fn reply(history: &[ChatTurn], text: &str) -> ReplyAction {
    let needle = text.to_lowercase();

    let matched = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| needle.contains(k)));

    match matched {
        Some(Rule {
            reply,
            redirect_to: Some(to),
            ..
        }) => redirect(reply, to),
        Some(Rule { reply, .. }) => ReplyAction::Reply {
            text: (*reply).to_string(),
        },
        None if trailing_fallbacks(history) >= 2 => redirect(ESCALATION_REPLY, "/contact"),
        None => ReplyAction::Reply {
            text: FALLBACK_REPLY.to_string(),
        },
    }
}

fn redirect(text: &str, to: &str) -> ReplyAction {
    ReplyAction::Redirect {
        text: text.to_string(),
        after_ms: REDIRECT_DELAY_MS,
        to: to.to_string(),
    }
}

/// Number of most recent bot turns that were fallback answers.
fn trailing_fallbacks(history: &[ChatTurn]) -> usize {
    history
        .iter()
        .rev()
        .filter(|turn| turn.role == ChatRole::Bot)
        .take_while(|turn| turn.text == FALLBACK_REPLY)
        .count()
}
