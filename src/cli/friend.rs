//! Friend CLI commands
//!
//! Implements the roster commands of the shell.

use clap::Subcommand;

use crate::display::format_friend_list;
use crate::error::SplitResult;
use crate::services::FriendService;
use crate::storage::Storage;

/// Friend subcommands
#[derive(Subcommand, Debug)]
pub enum FriendCommands {
    /// Add a friend to the roster
    Add {
        /// Friend name
        name: String,
    },
    /// Remove a friend from the roster
    #[command(alias = "rm")]
    Remove {
        /// Friend name or ID
        friend: String,
    },
    /// List all friends
    #[command(alias = "ls")]
    List,
}

/// Handle a friend command
pub fn handle_friend_command(storage: &Storage, cmd: FriendCommands) -> SplitResult<()> {
    let service = FriendService::new(storage);

    match cmd {
        FriendCommands::Add { name } => {
            let friend = service.add(&name)?;
            println!("Added friend: {}", friend.name);
            println!("  ID: {}", friend.id);
        }

        FriendCommands::Remove { friend } => {
            let removed = match service.find(&friend)? {
                Some(found) => service.remove(found.id)?,
                None => None,
            };

            match removed {
                Some(f) => println!("Removed friend: {}", f.name),
                None => println!("No friend matching '{}'; nothing removed.", friend),
            }
        }

        FriendCommands::List => {
            print!("{}", format_friend_list(&service.list()?));
        }
    }

    Ok(())
}
