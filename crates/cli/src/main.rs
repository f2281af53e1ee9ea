//! QuestLog CLI - gamified personal task tracker.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use questlog_api::ApiService;
use questlog_core::{Category, Complexity, Difficulty, Priority, Stat, Task, TaskId};
use questlog_engine::{QuestService, TaskSpec};
use questlog_progression::{
    find_exercise, find_group, level_progress, task_xp_reward, ACHIEVEMENTS, EXERCISE_GROUPS,
};
use questlog_storage::JsonStorage;
use tracing::Level;

#[derive(Parser)]
#[command(name = "questlog")]
#[command(about = "Gamified personal task tracker", long_about = None)]
struct Cli {
    /// Storage directory
    #[arg(long, default_value = ".questlog")]
    data_dir: String,

    /// Remote store URL; falls back to local storage when unreachable
    #[arg(long)]
    api: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new quest
    Add {
        /// Quest title
        title: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Priority: low, medium, high
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Complexity: simple, normal, complex, epic
        #[arg(long, default_value = "normal")]
        complexity: String,
        /// Category (work, personal, health, learning, creative, fitness,
        /// mindfulness, social; anything else counts as general)
        #[arg(long, default_value = "general")]
        category: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Estimated hours
        #[arg(long, default_value = "1")]
        estimated_hours: f32,
        /// Tags
        #[arg(long)]
        tag: Vec<String>,
    },
    /// List quests
    List {
        /// Filter by status: all, pending, completed
        #[arg(long, default_value = "all")]
        status: String,
        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,
        /// Search in title and description
        #[arg(long)]
        search: Option<String>,
    },
    /// Complete a quest and collect the reward
    Complete {
        /// Task ID
        id: String,
    },
    /// Reopen a completed quest (rewards are kept)
    Reopen {
        /// Task ID
        id: String,
    },
    /// Delete a quest
    Delete {
        /// Task ID
        id: String,
    },
    /// List the exercise catalog
    Exercises {
        /// Only show one group
        group: Option<String>,
    },
    /// Log an exercise performance
    Log {
        /// Exercise name from the catalog
        exercise: String,
        /// Measured value (reps, minutes, kg or pages)
        value: u32,
        /// Difficulty: easy, normal, hard, extreme
        #[arg(long, default_value = "normal")]
        difficulty: String,
    },
    /// Show level, XP, stats and lifestyle scores
    Stats,
    /// Show the achievement board
    Achievements,
    /// Show pending notifications
    Notifications,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let storage = JsonStorage::new(&cli.data_dir).await?;
    let service = QuestService::new(storage);
    service.bootstrap().await?;

    match cli.command {
        Commands::Add {
            title,
            description,
            priority,
            complexity,
            category,
            due,
            estimated_hours,
            tag,
        } => {
            let priority = parse_priority(&priority)?;
            let complexity = parse_complexity(&complexity)?;
            let category: Category = category.parse().unwrap_or(Category::Other);

            let task = service
                .create_task(TaskSpec {
                    title,
                    description,
                    priority,
                    complexity,
                    category,
                    tags: tag,
                    due_date: due,
                    estimated_hours,
                })
                .await?;

            if let Some(api_url) = cli.api {
                let mut api = ApiService::connect(api_url, service.storage()).await;
                if api.backend_active() {
                    api.create_task(&task).await?;
                }
            }

            println!("Added quest: {} - {}", task.id, task.title);
            println!(
                "  Reward on completion: +{} XP",
                task_xp_reward(task.priority, task.complexity)
            );
        }
        Commands::List {
            status,
            priority,
            search,
        } => {
            let tasks = match cli.api {
                Some(api_url) => {
                    let mut api = ApiService::connect(api_url, service.storage()).await;
                    api.get_tasks().await?
                }
                None => service.list_tasks().await?,
            };

            let priority = priority.as_deref().map(parse_priority).transpose()?;
            let tasks: Vec<&Task> = tasks
                .iter()
                .filter(|t| match status.as_str() {
                    "completed" => t.completed,
                    "pending" => !t.completed,
                    _ => true,
                })
                .filter(|t| priority.map_or(true, |p| t.priority == p))
                .filter(|t| {
                    search.as_deref().map_or(true, |q| {
                        let q = q.to_lowercase();
                        t.title.to_lowercase().contains(&q)
                            || t.description.to_lowercase().contains(&q)
                    })
                })
                .collect();

            println!("Quests ({})", tasks.len());
            for task in tasks {
                println!(
                    "  {} | {} | {}/{} | {} | +{} XP - {}",
                    task.id,
                    if task.completed { "DONE" } else { "OPEN" },
                    format_priority(task.priority),
                    format_complexity(task.complexity),
                    task.category.label(),
                    task_xp_reward(task.priority, task.complexity),
                    task.title,
                );
            }
        }
        Commands::Complete { id } => {
            let id = parse_task_id(&id)?;
            let task = find_task(&service, id).await?;
            if task.completed {
                println!("Quest already completed");
                return Ok(());
            }

            let outcome = service.toggle_task(id).await?;
            println!("Quest completed: {}", outcome.task.title);
            if let Some(award) = outcome.award {
                println!("  +{} XP", award.xp);
                for (stat, value) in award.boosts.gains() {
                    println!("  +{} {}", value, stat.name());
                }
                if let Some(level_up) = award.level_up {
                    println!(
                        "  LEVEL UP! {} -> {} ({})",
                        level_up.old_level, level_up.new_level, level_up.rewards.title
                    );
                    if level_up.rewards.stat_points > 0 {
                        println!("  +{} stat points", level_up.rewards.stat_points);
                    }
                    for milestone in &level_up.rewards.milestones {
                        println!("  Achievement: {}", milestone);
                    }
                }
            }
        }
        Commands::Reopen { id } => {
            let id = parse_task_id(&id)?;
            let task = find_task(&service, id).await?;
            if !task.completed {
                println!("Quest is not completed");
                return Ok(());
            }

            let outcome = service.toggle_task(id).await?;
            println!("Quest reopened: {}", outcome.task.title);
        }
        Commands::Delete { id } => {
            let id = parse_task_id(&id)?;
            let removed = service.delete_task(id).await?;
            if removed {
                if let Some(api_url) = cli.api {
                    let mut api = ApiService::connect(api_url, service.storage()).await;
                    if api.backend_active() {
                        api.delete_task(id).await?;
                    }
                }
                println!("Quest deleted");
            } else {
                println!("Quest not found");
            }
        }
        Commands::Exercises { group } => {
            let groups: Vec<_> = match group.as_deref() {
                Some(id) => {
                    let group = find_group(id)
                        .ok_or_else(|| anyhow::anyhow!("Unknown exercise group: {}", id))?;
                    vec![group]
                }
                None => EXERCISE_GROUPS.iter().collect(),
            };

            for group in groups {
                println!(
                    "{} ({}) - primary: {}",
                    group.name,
                    group.id,
                    group.primary_stat.name()
                );
                for exercise in group.exercises {
                    let rewards: Vec<String> = exercise
                        .base_reward
                        .gains()
                        .into_iter()
                        .map(|(stat, value)| format!("+{} {}", value, stat.name()))
                        .collect();
                    println!(
                        "  {} [{}] {}",
                        exercise.name,
                        exercise.measurement.unit(),
                        rewards.join(", ")
                    );
                }
            }
        }
        Commands::Log {
            exercise,
            value,
            difficulty,
        } => {
            let exercise = find_exercise(&exercise)
                .ok_or_else(|| anyhow::anyhow!("Unknown exercise: {}", exercise))?;
            let difficulty: Difficulty = difficulty
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;

            let outcome = service.log_exercise(exercise, value, difficulty).await?;
            println!(
                "{} logged: {} {}",
                exercise.name,
                value,
                exercise.measurement.unit()
            );
            println!("  +{} XP", outcome.award.xp);
            for (stat, gain) in outcome.award.boosts.gains() {
                println!("  +{} {}", gain, stat.name());
            }
            if let Some(level_up) = outcome.award.level_up {
                println!(
                    "  LEVEL UP! {} -> {} ({})",
                    level_up.old_level, level_up.new_level, level_up.rewards.title
                );
            }
        }
        Commands::Stats => {
            let Some(user) = service.current_user().await? else {
                println!("No current user");
                return Ok(());
            };
            let stats = &user.reality_stats;
            let progress = level_progress(user.xp);

            println!("{} - Level {} {}", user.name, user.level, stats.current_title);
            println!(
                "  XP: {} ({}/{} into this level, {:.0}%)",
                user.xp, progress.current, progress.total, progress.percentage
            );
            println!("  XP to next level: {}", progress.remaining);
            println!("  Quests completed: {}", user.tasks_completed);
            println!();
            println!("Stats");
            for stat in Stat::ALL {
                println!("  {:<20} {}", stat.name(), stats.counter(stat));
            }
            println!();
            println!("Lifestyle");
            println!("  {:<20} {:.0}", "Health", stats.health_score);
            println!("  {:<20} {:.0}", "Productivity", stats.productivity_score);
            println!("  {:<20} {:.0}", "Mindfulness", stats.mindfulness_score);
            println!("  {:<20} {:.0}", "Social", stats.social_score);
        }
        Commands::Achievements => {
            let Some(user) = service.current_user().await? else {
                println!("No current user");
                return Ok(());
            };

            println!("Achievements");
            for achievement in ACHIEVEMENTS {
                let mark = if achievement.unlocked(&user.reality_stats) {
                    "x"
                } else {
                    " "
                };
                println!(
                    "  [{}] {} - {}",
                    mark, achievement.name, achievement.description
                );
            }
        }
        Commands::Notifications => {
            let queue = service.notifications().await?;
            if queue.is_empty() {
                println!("No pending notifications");
            }
            for notification in queue {
                println!(
                    "  [{}] {}",
                    notification.timestamp.format("%H:%M:%S"),
                    notification.message
                );
            }
        }
    }

    Ok(())
}

async fn find_task<S: questlog_storage::Storage + 'static>(
    service: &QuestService<S>,
    id: TaskId,
) -> Result<Task> {
    service
        .list_tasks()
        .await?
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| anyhow::anyhow!("Quest not found: {}", id))
}

fn parse_task_id(s: &str) -> Result<TaskId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid task ID: {}", s))
}

fn parse_priority(s: &str) -> Result<Priority> {
    match s.to_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(anyhow::anyhow!("Unknown priority: {}", other)),
    }
}

fn parse_complexity(s: &str) -> Result<Complexity> {
    match s.to_lowercase().as_str() {
        "simple" => Ok(Complexity::Simple),
        "normal" => Ok(Complexity::Normal),
        "complex" => Ok(Complexity::Complex),
        "epic" => Ok(Complexity::Epic),
        other => Err(anyhow::anyhow!("Unknown complexity: {}", other)),
    }
}

fn format_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

fn format_complexity(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Simple => "simple",
        Complexity::Normal => "normal",
        Complexity::Complex => "complex",
        Complexity::Epic => "epic",
    }
}
