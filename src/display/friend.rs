//! Friend display formatting

use crate::models::Friend;

/// Format the roster
pub fn format_friend_list(friends: &[Friend]) -> String {
    if friends.is_empty() {
        return "No friends yet. Add one with `friend add <name>`.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<13} {}\n", "ID", "Name"));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for friend in friends {
        output.push_str(&format!("{:<13} {}\n", friend.id, friend.name));
    }

    output
}
