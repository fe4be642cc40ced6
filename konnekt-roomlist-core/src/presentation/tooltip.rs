use crate::domain::Member;

/// Describe what each member of an expanded room is doing, one line each
pub fn format_member_tooltip(members: &[Member]) -> String {
    members
        .iter()
        .map(|member| {
            if member.is_playing() {
                format!("{} is playing {}", member.display_name(), member.game_name())
            } else {
                format!("{} is not playing a game", member.display_name())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
