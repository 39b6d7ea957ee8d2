use serenity::all::ChannelId;

/// Text channel of a guild, as seen by the raid and broadcast services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChannel {
    /// Discord channel ID
    pub id: ChannelId,
    /// Channel name without the leading `#`
    pub name: String,
}

impl TextChannel {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ChannelId::new(id),
            name: name.into(),
        }
    }
}
