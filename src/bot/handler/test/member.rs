use super::*;

fn guild() -> MockGateway {
    MockGateway::new()
        .with_guild(
            1,
            vec![TextChannel::new(10, "general"), TextChannel::new(11, "admin")],
        )
        .with_role(1, "Member", 500)
}

/// Tests the auto-role on a single join.
///
/// Expected: role 500 granted to the member, no lockdown
#[tokio::test]
async fn grants_auto_role_without_lockdown() {
    let gateway = guild();
    let tracker = JoinTracker::new(RaidPolicy::default());
    let member = create_test_member(1, 42, "newcomer");

    let report = handle_guild_member_addition(&gateway, &tracker, "Member", &member, t(0)).await;

    assert!(report.is_none());
    assert_eq!(
        gateway.granted_roles(),
        vec![(GuildId::new(1), UserId::new(42), RoleId::new(500))]
    );
    assert!(gateway.denied_overwrites().is_empty());
    assert_eq!(tracker.recent_joins(GuildId::new(1)), 1);
}

/// Tests a guild without the configured role.
///
/// Expected: no grant attempted, join still tracked
#[tokio::test]
async fn skips_auto_role_when_role_is_missing() {
    let gateway = guild();
    let tracker = JoinTracker::new(RaidPolicy::default());
    let member = create_test_member(1, 42, "newcomer");

    handle_guild_member_addition(&gateway, &tracker, "Verified", &member, t(0)).await;

    assert!(gateway.granted_roles().is_empty());
    assert_eq!(tracker.recent_joins(GuildId::new(1)), 1);
}

/// Tests a burst of joins reaching the threshold.
///
/// Five members join within a few seconds. The fifth join must trigger the
/// lockdown, alerting #admin with the fifth member as trigger.
///
/// Expected: lockdown on the fifth join only, both channels locked
#[tokio::test]
async fn fifth_join_in_window_triggers_lockdown() {
    let gateway = guild();
    let tracker = JoinTracker::new(RaidPolicy::default());

    let mut reports = Vec::new();
    for n in 0..5u64 {
        let member = create_test_member(1, 100 + n, &format!("raider{}", n));
        reports.push(
            handle_guild_member_addition(&gateway, &tracker, "Member", &member, t(n as i64)).await,
        );
    }

    assert!(reports[..4].iter().all(Option::is_none));
    let report = reports[4].as_ref().unwrap();
    assert!(matches!(report.alert, AlertOutcome::Sent(id) if id == ChannelId::new(11)));
    assert_eq!(report.locked, vec![ChannelId::new(10), ChannelId::new(11)]);
    assert_eq!(gateway.granted_roles().len(), 5);

    let alert = &gateway.sent_messages()[0].1;
    assert_eq!(alert["embeds"][0]["fields"][0]["value"], "<@104> (raider4)");
}

/// Tests that a failing role grant does not block raid detection.
///
/// Expected: no roles granted, lockdown still runs on the threshold join
#[tokio::test]
async fn role_grant_failure_does_not_block_detection() {
    let gateway = guild().failing_role_grants();
    let tracker = JoinTracker::new(RaidPolicy::new(60, 2));

    let first = create_test_member(1, 1, "a");
    let second = create_test_member(1, 2, "b");
    assert!(handle_guild_member_addition(&gateway, &tracker, "Member", &first, t(0))
        .await
        .is_none());
    let report = handle_guild_member_addition(&gateway, &tracker, "Member", &second, t(1)).await;

    assert!(report.is_some());
    assert!(gateway.granted_roles().is_empty());
    assert_eq!(gateway.denied_overwrites().len(), 2);
}

/// Tests that a raid in one guild leaves another guild untouched.
///
/// Expected: guild 1 locked down, guild 2 only receives its auto-role grant
#[tokio::test]
async fn raid_in_one_guild_does_not_lock_another() {
    let gateway = guild()
        .with_guild(2, vec![TextChannel::new(20, "general")])
        .with_role(2, "Member", 600);
    let tracker = JoinTracker::new(RaidPolicy::new(60, 3));

    for n in 0..3u64 {
        let member = create_test_member(1, 100 + n, "raider");
        handle_guild_member_addition(&gateway, &tracker, "Member", &member, t(n as i64)).await;
    }
    let bystander = create_test_member(2, 200, "bystander");
    let report =
        handle_guild_member_addition(&gateway, &tracker, "Member", &bystander, t(3)).await;

    assert!(report.is_none());
    assert!(gateway
        .denied_overwrites()
        .iter()
        .all(|(channel, _)| *channel != ChannelId::new(20)));
}
