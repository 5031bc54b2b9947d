//! Keyword-matched chatbot brain
//!
//! Maps free-text user input onto a fixed set of Hungarian replies through an
//! ordered list of keyword-containment rules; the first rule that fires wins.
//! The session transcript is append-only and never consulted by the rules.

use chrono::{DateTime, Utc};

use super::random::RandomSource;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            at,
        }
    }

    pub fn bot(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
            at,
        }
    }
}

/// Append-only session transcript. Lives for the page lifetime, is never
/// persisted, and exposes no removal API.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Reply topics in rule-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Pricing,
    Services,
    Contact,
    Ai,
    It,
    Online,
    Appointment,
    Location,
    Greeting,
    Help,
}

/// Greeting variants; one is drawn at random per greeting.
pub const GREETING_REPLIES: [&str; 3] = [
    "Üdvözlöm! DebreTech AI asszisztens vagyok. Miben segíthetek ma?",
    "Szia! Mit szeretne tudni AI és IT megoldásainkról?",
    "Szuper, hogy itt van! Mire kíváncsi DebreTech szolgáltatásaival kapcsolatban?",
];

pub const PRICING_REPLY: &str = "🤖 **AI és IT szolgáltatásaink árai:**\n• AI Chatbot & Automatizálás: 25.000 Ft/hó\n• IT Rendszerintegráció & Support: 15.000 Ft/hó\n• Online jelenlét & Review management: 10.000 Ft/hó\n• Időpontfoglalási rendszerek: 8.000 Ft/hó\n💡 Kombinált csomagok 20% kedvezménnyel!";

pub const SERVICES_REPLY: &str = "🛠️ Fő szolgáltatásaink: AI chatbotok és automatizálás, IT rendszerintegráció, online jelenlét menedzsment, és időpontfoglalási rendszerek. Melyik érdekelné?";

pub const CONTACT_REPLY: &str = "📞 Elérhetőségek: +36 30 123 4567, info@debretech.hu. Debrecenben vagyunk, de országosan dolgozunk!";

pub const AI_REPLY: &str = "🤖 AI megoldásainkkal automatizálhatja ügyfélszolgálatát, lead gyűjtését, és üzleti folyamatait. Make.com platformot használunk a workflow automatizáláshoz.";

pub const IT_REPLY: &str = "💻 IT szolgáltatásaink: Windows telepítés, PC karbantartás, rendszerintegráció, hálózat kiépítés és folyamatos IT támogatás vállalkozások számára.";

pub const ONLINE_REPLY: &str = "⭐ Online jelenlét szolgáltatásaink: Google & Facebook review management, SEO optimalizálás, és digitális marketing megoldások.";

pub const APPOINTMENT_REPLY: &str = "📅 Időpontfoglalási rendszerek: Calendly/SimplyBook integráció, webhook automatizálás, CRM kapcsolatok és értesítések.";

pub const LOCATION_REPLY: &str = "🏢 Debrecenben székelünk, de az egész országban dolgozunk. Helyi szakértelem, országos lefedettség!";

pub const HELP_REPLY: &str = "💬 Segítek minden kérdésben! Beszélhetünk árakról, szolgáltatásokról, vagy technikai részletekről. Mit szeretne tudni?";

/// Fallback when no rule matches; invites direct contact.
pub const DEFAULT_REPLY: &str = "🤔 Érdekes kérdés! Beszéljünk róla részletesebben. Hívjon fel a +36 30 123 4567 számon, vagy írjon az info@debretech.hu címre!";

/// Shown in the transcript while a reply is pending.
pub const TYPING_NOTICE: &str = "💭 Gépelés...";

/// Lower bound of the composing delay, in milliseconds.
pub const THINKING_DELAY_MIN_MS: u32 = 800;

/// Width of the random part of the composing delay, in milliseconds.
pub const THINKING_DELAY_SPREAD_MS: u32 = 1_000;

type Predicate = fn(&str) -> bool;

fn contains_any(msg: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| msg.contains(keyword))
}

fn about_pricing(msg: &str) -> bool {
    contains_any(msg, &["ár", "költség", "mennyibe", "díj"])
}

fn about_services(msg: &str) -> bool {
    contains_any(msg, &["szolgáltatás", "mit csinál", "mit kínál"])
}

fn about_contact(msg: &str) -> bool {
    contains_any(msg, &["kapcsolat", "telefon", "email", "elérhetőség"])
}

fn about_ai(msg: &str) -> bool {
    contains_any(msg, &["ai", "chatbot", "automatizál", "mesterséges"])
}

fn about_it(msg: &str) -> bool {
    contains_any(msg, &["it", "számítógép", "rendszer", "windows"])
}

fn about_online_presence(msg: &str) -> bool {
    contains_any(msg, &["online", "review", "google", "facebook"])
}

fn about_appointments(msg: &str) -> bool {
    contains_any(msg, &["időpont", "calendly", "foglalás", "meeting"])
}

fn about_location(msg: &str) -> bool {
    contains_any(msg, &["debrecen", "hol", "cím", "helyszín"])
}

/// Greeting words, or "jó" and "nap" both present anywhere in the message.
/// The conjunction is deliberately loose; it is not anchored to the phrase
/// "jó napot".
fn is_greeting(msg: &str) -> bool {
    contains_any(msg, &["szia", "hello", "üdv"]) || (msg.contains("jó") && msg.contains("nap"))
}

fn asks_for_help(msg: &str) -> bool {
    contains_any(msg, &["segít", "help", "hogy", "mit"])
}

/// Rule table, evaluated top to bottom. Order carries the priority: a message
/// mentioning both prices and AI gets the pricing reply.
const RULES: &[(Topic, Predicate)] = &[
    (Topic::Pricing, about_pricing),
    (Topic::Services, about_services),
    (Topic::Contact, about_contact),
    (Topic::Ai, about_ai),
    (Topic::It, about_it),
    (Topic::Online, about_online_presence),
    (Topic::Appointment, about_appointments),
    (Topic::Location, about_location),
    (Topic::Greeting, is_greeting),
    (Topic::Help, asks_for_help),
];

/// Trimmed user input, or `None` when there is nothing to send.
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Classifies an utterance against the rule table. Matching runs on the
/// lower-cased, trimmed text via plain substring containment.
pub fn classify(utterance: &str) -> Option<Topic> {
    let normalized = utterance.to_lowercase();
    let msg = normalized.trim();
    RULES
        .iter()
        .find(|(_, matches)| matches(msg))
        .map(|(topic, _)| *topic)
}

/// Canned reply for an utterance. Greetings draw one of three variants from
/// `rng`; every other branch is deterministic, and unmatched input falls
/// through to [`DEFAULT_REPLY`].
pub fn respond(utterance: &str, rng: &mut dyn RandomSource) -> &'static str {
    match classify(utterance) {
        Some(Topic::Pricing) => PRICING_REPLY,
        Some(Topic::Services) => SERVICES_REPLY,
        Some(Topic::Contact) => CONTACT_REPLY,
        Some(Topic::Ai) => AI_REPLY,
        Some(Topic::It) => IT_REPLY,
        Some(Topic::Online) => ONLINE_REPLY,
        Some(Topic::Appointment) => APPOINTMENT_REPLY,
        Some(Topic::Location) => LOCATION_REPLY,
        Some(Topic::Greeting) => GREETING_REPLIES[rng.pick_index(GREETING_REPLIES.len())],
        Some(Topic::Help) => HELP_REPLY,
        None => DEFAULT_REPLY,
    }
}

/// Randomized composing delay in `[800, 1800)` milliseconds.
pub fn thinking_delay_ms(rng: &mut dyn RandomSource) -> u32 {
    THINKING_DELAY_MIN_MS + (rng.next_unit() * THINKING_DELAY_SPREAD_MS as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::ScriptedRandom;

    fn respond_fixed(utterance: &str) -> &'static str {
        respond(utterance, &mut ScriptedRandom::constant(0.0))
    }

    #[test]
    fn test_pricing_keywords() {
        assert_eq!(classify("ár"), Some(Topic::Pricing));
        assert_eq!(classify("Mennyibe kerül?"), Some(Topic::Pricing));
        assert_eq!(classify("van valami díj?"), Some(Topic::Pricing));
        assert_eq!(respond_fixed("ár"), PRICING_REPLY);
    }

    #[test]
    fn test_services_keywords() {
        assert_eq!(classify("szolgáltatás"), Some(Topic::Services));
        assert_eq!(classify("mit csinálnak pontosan?"), Some(Topic::Services));
        assert_eq!(respond_fixed("mit kínál a cég?"), SERVICES_REPLY);
    }

    #[test]
    fn test_contact_keywords() {
        assert_eq!(classify("kapcsolat"), Some(Topic::Contact));
        assert_eq!(classify("van telefonszámuk?"), Some(Topic::Contact));
        assert_eq!(respond_fixed("kapcsolat"), CONTACT_REPLY);
    }

    #[test]
    fn test_ai_and_it_keywords() {
        assert_eq!(classify("hogyan működik a chatbot?"), Some(Topic::Ai));
        assert_eq!(classify("mesterséges intelligencia"), Some(Topic::Ai));
        assert_eq!(classify("windows gépem van"), Some(Topic::It));
        assert_eq!(classify("lassú a számítógépem"), Some(Topic::It));
    }

    #[test]
    fn test_online_appointment_location_keywords() {
        assert_eq!(classify("google értékelések"), Some(Topic::Online));
        assert_eq!(classify("calendly összekötés"), Some(Topic::Appointment));
        assert_eq!(classify("debrecenben vannak?"), Some(Topic::Location));
        assert_eq!(respond_fixed("pontosan hol vannak?"), LOCATION_REPLY);
    }

    #[test]
    fn test_greeting_draws_each_variant() {
        assert_eq!(
            respond("szia", &mut ScriptedRandom::constant(0.0)),
            GREETING_REPLIES[0]
        );
        assert_eq!(
            respond("szia", &mut ScriptedRandom::constant(0.34)),
            GREETING_REPLIES[1]
        );
        assert_eq!(
            respond("szia", &mut ScriptedRandom::constant(0.99)),
            GREETING_REPLIES[2]
        );
        assert!(GREETING_REPLIES.contains(&respond_fixed("hello")));
        assert_eq!(classify("üdvözlöm"), Some(Topic::Greeting));
    }

    #[test]
    fn test_greeting_conjunction_is_loose() {
        // "jó" and "nap" may sit anywhere in the message
        assert_eq!(classify("jó napot kívánok"), Some(Topic::Greeting));
        assert_eq!(classify("a nap végén is jó lenne"), Some(Topic::Greeting));
        // Either word alone is not a greeting
        assert_eq!(classify("jó"), None);
        assert_eq!(classify("nap"), None);
    }

    #[test]
    fn test_rule_order_decides_overlaps() {
        // Pricing outranks AI
        assert_eq!(classify("mennyibe kerül a chatbot?"), Some(Topic::Pricing));
        // Services outranks help even though "mit" is a help keyword
        assert_eq!(classify("mit kínál"), Some(Topic::Services));
        // Greeting outranks help
        assert_eq!(classify("szia, hogy vagy?"), Some(Topic::Greeting));
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // Containment, not word boundaries
        assert_eq!(classify("várom a választ"), Some(Topic::Pricing));
        assert_eq!(classify("szolgáltatásait keresem"), Some(Topic::Services));
    }

    #[test]
    fn test_normalization_before_matching() {
        assert_eq!(classify("  ÁR  "), Some(Topic::Pricing));
        assert_eq!(classify("KAPCSOLAT"), Some(Topic::Contact));
    }

    #[test]
    fn test_unmatched_input_falls_back() {
        assert_eq!(classify("qwerty"), None);
        assert_eq!(respond_fixed("qwerty"), DEFAULT_REPLY);
    }

    #[test]
    fn test_help_keywords() {
        assert_eq!(classify("segítene nekem?"), Some(Topic::Help));
        assert_eq!(respond_fixed("help"), HELP_REPLY);
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("  hello  "), Some("hello".to_string()));
        assert_eq!(normalize_input(""), None);
        assert_eq!(normalize_input("   \n\t "), None);
    }

    #[test]
    fn test_thinking_delay_bounds() {
        assert_eq!(thinking_delay_ms(&mut ScriptedRandom::constant(0.0)), 800);
        let top = thinking_delay_ms(&mut ScriptedRandom::constant(0.999));
        assert!(top >= 800 && top < 1800);
    }

    #[test]
    fn test_conversation_log_appends_in_order() {
        let now = Utc::now();
        let mut log = ConversationLog::new();
        assert!(log.is_empty());

        log.push(ConversationTurn::user("szia", now));
        log.push(ConversationTurn::bot(GREETING_REPLIES[0], now));

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].speaker, Speaker::User);
        assert_eq!(log.turns()[0].text, "szia");
        assert_eq!(log.turns()[1].speaker, Speaker::Bot);
    }
}
