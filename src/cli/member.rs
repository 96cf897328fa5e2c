//! Member CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::LibrisResult;
use crate::services::MembershipService;
use crate::storage::Storage;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Register a new member
    Register {
        /// Member ID
        member_id: String,
        /// Full name
        name: String,
        /// Contact email
        #[arg(short, long, default_value = "")]
        email: String,
        /// Password; prompted for interactively when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Handle a member command
pub fn handle_member_command(
    storage: &Storage,
    settings: &Settings,
    cmd: MemberCommands,
) -> LibrisResult<()> {
    let service = MembershipService::new(storage, settings);

    match cmd {
        MemberCommands::Register {
            member_id,
            name,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => rpassword::prompt_password("Password: ")?,
            };

            match service.register_member(&member_id, &name, &email, &password) {
                Ok(member) => {
                    println!("Member '{}' registered successfully.", member.name);
                    println!("  ID: {}", member.member_id);
                    println!("  Joined: {}", member.join_date);
                }
                Err(err) => super::report_failure(err)?,
            }
        }
    }

    Ok(())
}
