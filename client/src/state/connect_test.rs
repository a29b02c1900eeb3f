use super::*;

#[test]
fn flow_walks_three_steps_then_completes() {
    let mut flow = ConnectionFlow::default();
    assert!(flow.start());
    assert_eq!(flow.step, ConnectStep::Authorizing);
    assert!(!flow.advance());
    assert_eq!(flow.step, ConnectStep::Authenticating);
    assert!(!flow.advance());
    assert_eq!(flow.step, ConnectStep::StoringTokens);
    assert!(flow.advance());
    assert_eq!(flow.step, ConnectStep::Idle);
    assert!(!flow.connecting());
}

#[test]
fn start_while_connecting_is_refused() {
    let mut flow = ConnectionFlow::default();
    assert!(flow.start());
    flow.advance();
    assert!(!flow.start());
    assert_eq!(flow.step, ConnectStep::Authenticating);
}

#[test]
fn advance_when_idle_does_nothing() {
    let mut flow = ConnectionFlow::default();
    assert!(!flow.advance());
    assert_eq!(flow.step, ConnectStep::Idle);
}

#[test]
fn step_state_marks_done_active_waiting() {
    let mut flow = ConnectionFlow::default();
    flow.start();
    flow.advance();
    assert_eq!(flow.step_state(ConnectStep::Authorizing), StepState::Done);
    assert_eq!(flow.step_state(ConnectStep::Authenticating), StepState::Active);
    assert_eq!(flow.step_state(ConnectStep::StoringTokens), StepState::Waiting);
}

#[test]
fn sync_is_exclusive() {
    let mut flow = ConnectionFlow::default();
    assert!(flow.start_sync());
    assert!(!flow.start_sync());
    flow.finish_sync();
    assert!(!flow.syncing);
    assert!(flow.start_sync());
}

#[test]
fn progress_labels_are_in_order() {
    let labels: Vec<_> = ConnectStep::PROGRESS.iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        vec!["Initiating OAuth Authorization", "Authenticating with Intuit", "Storing Secure Tokens"]
    );
}
