//! exertrack-client CLI entry point.

use clap::Parser;
use exertrack_client::cli::{Cli, Commands};
use exertrack_client::client::ExertrackClient;
use exertrack_client::output::{emit, pretty, render};
use exertrack_core::tracker::{CreateExerciseRequest, LogQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = match &cli.base_url {
        Some(base_url) => ExertrackClient::new(base_url),
        None => ExertrackClient::from_env(),
    };
    let (format, quiet) = (cli.format, cli.quiet);

    match cli.command {
        Commands::Users(users_cmd) => {
            use exertrack_client::cli::users::UsersAction;
            match users_cmd.action {
                UsersAction::List => {
                    let users = client.list_users().await?;
                    emit(&render(users.as_slice(), format, pretty::format_users));
                }
                UsersAction::Create { username } => {
                    let user = client.create_user(&username).await?;
                    emit(&render(&user, format, |user| {
                        if quiet {
                            user.id.to_string()
                        } else {
                            format!("Created:\n{}", pretty::format_user(user))
                        }
                    }));
                }
            }
        }
        Commands::Exercises(exercises_cmd) => {
            use exertrack_client::cli::exercises::ExercisesAction;
            match exercises_cmd.action {
                ExercisesAction::Add {
                    user_id,
                    description,
                    duration,
                    date,
                } => {
                    let mut request = CreateExerciseRequest::new(description, duration);
                    if let Some(date) = date {
                        request = request.with_date(date);
                    }
                    let exercise = client.add_exercise(user_id, &request).await?;
                    emit(&render(&exercise, format, |exercise| {
                        let line = pretty::format_exercise(exercise);
                        if quiet {
                            line
                        } else {
                            format!("Added:\n{line}")
                        }
                    }));
                }
            }
        }
        Commands::Logs(logs_cmd) => {
            use exertrack_client::cli::logs::LogsAction;
            match logs_cmd.action {
                LogsAction::Get {
                    user_id,
                    from,
                    to,
                    limit,
                } => {
                    let query = LogQuery { from, to, limit };
                    let log = client.get_log(user_id, &query).await?;
                    emit(&render(&log, format, pretty::format_log));
                }
            }
        }
        Commands::Health(health_cmd) => {
            use exertrack_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    client.livez().await?;
                    if !quiet {
                        println!("Server is live at {}", client.base_url());
                    }
                }
                HealthAction::Ready => {
                    let ready = client.readyz().await?;
                    emit(&render(&ready, format, |ready| {
                        if quiet {
                            String::new()
                        } else {
                            format!("Readiness:\n  Status: {}", ready.status)
                        }
                    }));
                }
            }
        }
    }

    Ok(())
}
