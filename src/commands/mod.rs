//! Slash command registry and dispatch.
//!
//! Each command lives in its own module exposing a `NAME` const, a
//! `register()` builder, and an async `run()`. The registry is the
//! single list submitted to Discord at startup and matched against
//! incoming interactions; there is no reflection or runtime discovery.

pub mod github_repo;
pub mod github_search;
pub mod github_user;
pub mod help;
pub mod ping;
pub mod sync_commands;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, ResolvedValue,
};

use crate::bot::BotState;

/// The full command set, in the order it is registered with Discord.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        ping::register(),
        help::register(),
        github_user::register(),
        github_repo::register(),
        github_search::register(),
        sync_commands::register(),
    ]
}

/// Route an interaction to its handler.
///
/// Handler errors never escape the dispatch loop: they are logged and
/// answered with a generic notice when a follow-up is still possible.
pub async fn dispatch(ctx: &Context, command: &CommandInteraction, state: &BotState) {
    let name = command.data.name.as_str();
    log::info!("handling /{} from {}", name, command.user.name);

    let result = match name {
        ping::NAME => ping::run(ctx, command, state).await,
        help::NAME => help::run(ctx, command).await,
        github_user::NAME => github_user::run(ctx, command, state).await,
        github_repo::NAME => github_repo::run(ctx, command, state).await,
        github_search::NAME => github_search::run(ctx, command, state).await,
        sync_commands::NAME => sync_commands::run(ctx, command, state).await,
        unknown => {
            log::warn!("received unknown command '{}'", unknown);
            let reply = CreateInteractionResponseMessage::new()
                .content(format!("❌ Unknown command `/{unknown}`"))
                .ephemeral(true);
            command
                .create_response(&ctx.http, CreateInteractionResponse::Message(reply))
                .await
        }
    };

    if let Err(e) = result {
        log::error!("command '{}' failed: {}", name, e);
        let notice = CreateInteractionResponseFollowup::new()
            .content("❌ An internal error occurred while handling the command.");
        if let Err(e) = command.create_followup(&ctx.http, notice).await {
            log::error!("could not deliver error notice for '{}': {}", name, e);
        }
    }
}

/// Look up a string option by name from a resolved interaction.
fn str_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn registered_names() -> Vec<String> {
        definitions()
            .iter()
            .map(|command| {
                serde_json::to_value(command).unwrap()["name"]
                    .as_str()
                    .unwrap()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn registry_holds_the_expected_commands() {
        let names = registered_names();
        let unique: HashSet<_> = names.iter().collect();

        assert_eq!(names.len(), 6);
        assert_eq!(unique.len(), names.len(), "command names must be unique");
        for expected in [
            "ping",
            "help",
            "github_user",
            "github_repo",
            "github_search",
            "sync_commands",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn github_user_requires_its_username_option() {
        let command = serde_json::to_value(github_user::register()).unwrap();
        let option = &command["options"][0];

        assert_eq!(option["name"], "username");
        assert_eq!(option["required"], true);
    }

    #[test]
    fn sync_commands_is_admin_gated_by_default() {
        let command = serde_json::to_value(sync_commands::register()).unwrap();
        // Administrator permission bit.
        assert_eq!(command["default_member_permissions"], "8");
    }
}
