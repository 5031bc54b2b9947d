#[cfg(test)]
mod tests {
    use crate::core::chatbot::{
        self, ConversationLog, ConversationTurn, GREETING_REPLIES, PRICING_REPLY, Speaker,
    };
    use crate::core::contact::{ContactForm, FieldId, SubmitPhase, simulate_outcome};
    use crate::core::random::ScriptedRandom;
    use chrono::Utc;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(FieldId::Name, "Anna");
        form.set_value(FieldId::Email, "anna@example.com");
        form.set_value(FieldId::Message, "Hello");
        form
    }

    // ===== Contact form scenarios =====

    #[test]
    fn test_submission_success_flow() {
        let mut form = filled_form();
        let mut rng = ScriptedRandom::constant(0.0);

        let submission = form.begin_submit(Utc::now()).expect("valid form submits");
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        assert!(form.is_submitting());
        assert_eq!(submission.name, "Anna");
        assert_eq!(submission.email, "anna@example.com");

        form.finish_submit(simulate_outcome(&mut rng));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
        assert!(!form.is_submitting());
        for id in FieldId::ALL {
            assert_eq!(form.field(id).value, "");
            assert_eq!(form.field(id).error, None);
        }

        // Success notice clears after its interval, re-arming the form
        form.acknowledge();
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submission_failure_flow() {
        let mut form = filled_form();
        let mut rng = ScriptedRandom::constant(0.99);

        form.begin_submit(Utc::now()).expect("valid form submits");
        form.finish_submit(simulate_outcome(&mut rng));

        assert_eq!(form.phase(), SubmitPhase::Failed);
        assert!(!form.is_submitting());
        assert_eq!(form.field(FieldId::Name).value, "Anna");
        assert_eq!(form.field(FieldId::Email).value, "anna@example.com");
        assert_eq!(form.field(FieldId::Message).value, "Hello");

        // Manual retry with a cooperative transport goes through
        let mut lucky = ScriptedRandom::constant(0.0);
        form.begin_submit(Utc::now()).expect("retry submits");
        form.finish_submit(simulate_outcome(&mut lucky));
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
    }

    #[test]
    fn test_invalid_submission_takes_no_transport_action() {
        let mut form = ContactForm::new();
        form.set_value(FieldId::Name, "Anna");

        assert!(form.begin_submit(Utc::now()).is_none());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(form.field(FieldId::Email).error.is_some());
        assert!(form.field(FieldId::Message).error.is_some());
    }

    // ===== Chat session scenarios =====

    #[test]
    fn test_chat_session_flow() {
        let mut log = ConversationLog::new();
        let mut rng = ScriptedRandom::constant(0.0);

        // Blank input never reaches the transcript
        assert!(chatbot::normalize_input("   ").is_none());
        assert!(log.is_empty());

        let text = chatbot::normalize_input("  Mennyibe kerül a chatbot?  ").expect("non-empty");
        let now = Utc::now();
        log.push(ConversationTurn::user(text.clone(), now));
        let reply = chatbot::respond(&text, &mut rng);
        log.push(ConversationTurn::bot(reply, now));

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].speaker, Speaker::User);
        assert_eq!(log.turns()[0].text, "Mennyibe kerül a chatbot?");
        assert_eq!(log.turns()[1].speaker, Speaker::Bot);
        assert_eq!(log.turns()[1].text, PRICING_REPLY);
    }

    #[test]
    fn test_greeting_reply_is_always_a_known_variant() {
        for draw in [0.0, 0.2, 0.34, 0.5, 0.67, 0.9, 0.999] {
            let reply = chatbot::respond("jó napot", &mut ScriptedRandom::constant(draw));
            assert!(GREETING_REPLIES.contains(&reply), "unexpected greeting {reply:?}");
        }
    }
}
