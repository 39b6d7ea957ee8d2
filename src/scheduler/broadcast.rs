use serenity::all::CreateMessage;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::broadcast::{BroadcastPolicy, BroadcastReport},
    service::discord::GuildGateway,
};

/// Periodic broadcaster of the configured reminder message.
///
/// Starts at most once per process. The first start creates a repeated job on
/// a `JobScheduler` and keeps the scheduler alive for the process lifetime;
/// later starts (`cache_ready` fires again on every reconnect) are no-ops.
pub struct BroadcastScheduler {
    policy: BroadcastPolicy,
    /// Running scheduler, `None` until the first start
    scheduler: Mutex<Option<JobScheduler>>,
}

impl BroadcastScheduler {
    pub fn new(policy: BroadcastPolicy) -> Self {
        Self {
            policy,
            scheduler: Mutex::new(None),
        }
    }

    pub async fn is_running(&self) -> bool {
        self.scheduler.lock().await.is_some()
    }

    /// Starts broadcasting every `interval_hours` unless already running.
    ///
    /// Must only be called once the gateway connection is established, so the
    /// first tick sees the connected guilds. That first tick runs immediately;
    /// the following ones run on the repeated job.
    ///
    /// # Arguments
    /// - `gateway` - Discord access shared with every tick
    ///
    /// # Returns
    /// - `Ok(true)` - Scheduler started by this call
    /// - `Ok(false)` - Scheduler was already running, nothing changed
    /// - `Err(AppError::SchedulerErr)` - Failed to create or start the job
    pub async fn start(&self, gateway: Arc<dyn GuildGateway>) -> Result<bool, AppError> {
        let mut running = self.scheduler.lock().await;
        if running.is_some() {
            return Ok(false);
        }

        let scheduler = JobScheduler::new().await?;

        let job_gateway = gateway.clone();
        let job_policy = self.policy.clone();

        let job = Job::new_repeated_async(self.policy.interval(), move |_uuid, _lock| {
            let gateway = job_gateway.clone();
            let policy = job_policy.clone();

            Box::pin(async move {
                broadcast(gateway.as_ref(), &policy).await;
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;
        *running = Some(scheduler);

        let policy = self.policy.clone();
        tokio::spawn(async move {
            broadcast(gateway.as_ref(), &policy).await;
        });

        tracing::info!(
            "Broadcast scheduler started, posting to #{} every {} hour(s)",
            self.policy.channel_name,
            self.policy.interval_hours
        );

        Ok(true)
    }
}

/// Posts the broadcast message once to every connected guild.
///
/// Guilds without a text channel of the configured name are skipped. A failed
/// send is logged and does not affect the remaining guilds.
pub async fn broadcast(gateway: &dyn GuildGateway, policy: &BroadcastPolicy) -> BroadcastReport {
    let mut report = BroadcastReport::default();

    for guild_id in gateway.guild_ids() {
        let Some(channel) = gateway
            .text_channels(guild_id)
            .into_iter()
            .find(|channel| channel.name == policy.channel_name)
        else {
            tracing::debug!(
                "Guild {} has no #{} channel, skipping broadcast",
                guild_id,
                policy.channel_name
            );
            report.missing_channel.push(guild_id);
            continue;
        };

        match gateway
            .send_message(channel.id, CreateMessage::new().content(&policy.message))
            .await
        {
            Ok(()) => {
                tracing::info!("Sent broadcast to #{} in guild {}", channel.name, guild_id);
                report.sent.push(guild_id);
            }
            Err(e) => {
                tracing::error!(
                    "Failed to send broadcast to #{} ({}) in guild {}: {}",
                    channel.name,
                    channel.id,
                    guild_id,
                    e
                );
                report.failed.push((guild_id, e));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::{ChannelId, GuildId};

    use crate::model::channel::TextChannel;
    use crate::service::discord::mock::MockGateway;

    fn policy() -> BroadcastPolicy {
        BroadcastPolicy {
            interval_hours: 2,
            channel_name: "general".to_string(),
            message: "Daily reminder".to_string(),
        }
    }

    /// Tests a broadcast tick across several guilds.
    ///
    /// Guild 1 has the channel, guild 2 does not, guild 3 has it but sending
    /// fails. The failure must not stop guild 4 from receiving the message.
    ///
    /// Expected: sent to 1 and 4, failed for 3, missing for 2
    #[tokio::test]
    async fn posts_to_every_guild_with_the_channel() {
        let gateway = MockGateway::new()
            .with_guild(1, vec![TextChannel::new(10, "general")])
            .with_guild(2, vec![TextChannel::new(20, "random")])
            .with_guild(3, vec![TextChannel::new(30, "general")])
            .with_guild(4, vec![TextChannel::new(41, "rules"), TextChannel::new(40, "general")])
            .failing_channel(30);

        let report = broadcast(&gateway, &policy()).await;

        assert_eq!(report.sent, vec![GuildId::new(1), GuildId::new(4)]);
        assert_eq!(report.missing_channel, vec![GuildId::new(2)]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, GuildId::new(3));

        let sent = gateway.sent_messages();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].0, ChannelId::new(40));
        assert_eq!(sent[1].1["content"], "Daily reminder");
    }

    /// Tests a broadcast while the bot is in no guild.
    ///
    /// Expected: empty report
    #[tokio::test]
    async fn no_guilds_sends_nothing() {
        let gateway = MockGateway::new();

        let report = broadcast(&gateway, &policy()).await;

        assert!(report.sent.is_empty());
        assert!(report.failed.is_empty());
        assert!(report.missing_channel.is_empty());
    }

    /// Tests the idempotent start guard.
    ///
    /// `cache_ready` fires again after a reconnect; the second start must
    /// not create a second job.
    ///
    /// Expected: first start returns true, second returns false
    #[tokio::test(flavor = "multi_thread")]
    async fn second_start_is_a_no_op() {
        let scheduler = BroadcastScheduler::new(policy());
        let gateway: Arc<dyn GuildGateway> = Arc::new(MockGateway::new());

        assert!(!scheduler.is_running().await);
        assert!(scheduler.start(gateway.clone()).await.unwrap());
        assert!(scheduler.is_running().await);
        assert!(!scheduler.start(gateway).await.unwrap());
        assert!(scheduler.is_running().await);
    }

    /// Tests starting with the longest interval the configuration accepts.
    ///
    /// Expected: the repeated job is created without overflowing
    #[tokio::test(flavor = "multi_thread")]
    async fn starts_with_maximum_interval() {
        let scheduler = BroadcastScheduler::new(BroadcastPolicy {
            interval_hours: crate::config::MAX_BROADCAST_INTERVAL_HOURS,
            ..policy()
        });
        let gateway: Arc<dyn GuildGateway> = Arc::new(MockGateway::new());

        assert!(scheduler.start(gateway).await.unwrap());
    }

    #[test]
    fn interval_is_converted_to_hours() {
        assert_eq!(policy().interval(), std::time::Duration::from_secs(2 * 60 * 60));
    }
}
