use crate::models::{Action, ActionType, Signal};
use crate::pipeline::messages::MessageTemplates;
use crate::pipeline::signals::signal_ids;

fn action(action_type: ActionType, label: &str, description: &str) -> Action {
    Action {
        action_type,
        label: label.to_string(),
        description: description.to_string(),
    }
}

/// Suggested next steps. Marketing opt-out and deletion are always offered;
/// a sharing stop is added when any third-party signal fired.
pub fn suggest_actions(signals: &[Signal]) -> Vec<Action> {
    let mut actions = vec![action(
        ActionType::WithdrawConsent,
        MessageTemplates::WITHDRAW_CONSENT_LABEL,
        MessageTemplates::WITHDRAW_CONSENT_DESCRIPTION,
    )];

    let third_party_flagged = signals.iter().any(|s| {
        s.signal_id == signal_ids::THIRD_PARTY_PRESENT
            || s.signal_id == signal_ids::VAGUE_THIRD_PARTY_LANGUAGE
    });
    if third_party_flagged {
        actions.push(action(
            ActionType::StopThirdParty,
            MessageTemplates::STOP_THIRD_PARTY_LABEL,
            MessageTemplates::STOP_THIRD_PARTY_DESCRIPTION,
        ));
    }

    actions.push(action(
        ActionType::DeleteData,
        MessageTemplates::DELETE_DATA_LABEL,
        MessageTemplates::DELETE_DATA_DESCRIPTION,
    ));
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Evidence, Severity};

    fn signal(id: &str) -> Signal {
        Signal {
            signal_id: id.into(),
            severity: Severity::Medium,
            title: String::new(),
            description: String::new(),
            evidence: vec![Evidence::at_line("q", 1)],
        }
    }

    fn types(actions: &[Action]) -> Vec<ActionType> {
        actions.iter().map(|a| a.action_type).collect()
    }

    #[test]
    fn base_actions_always_present() {
        assert_eq!(
            types(&suggest_actions(&[])),
            vec![ActionType::WithdrawConsent, ActionType::DeleteData]
        );
    }

    #[test]
    fn third_party_signal_adds_stop_action() {
        let actions = suggest_actions(&[signal("third_party_present")]);
        assert_eq!(
            types(&actions),
            vec![
                ActionType::WithdrawConsent,
                ActionType::StopThirdParty,
                ActionType::DeleteData,
            ]
        );
        assert_eq!(actions[1].label, "제3자 제공 중단 요청");
    }

    #[test]
    fn vague_third_party_alone_adds_stop_action() {
        let actions = suggest_actions(&[signal("vague_third_party_language")]);
        assert!(types(&actions).contains(&ActionType::StopThirdParty));
    }

    #[test]
    fn unrelated_signals_add_nothing() {
        let actions = suggest_actions(&[signal("retention_missing"), signal("revoke_path_missing")]);
        assert_eq!(actions.len(), 2);
    }
}
