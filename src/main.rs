//! Command-line interface for the daily tracker.
//!
//! Thin presentation layer: loads the saved state, runs one engine
//! command, prints the returned events, and saves on success. All
//! progression rules live in the library.

use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use daily_tracker::achievements::{achievement_def, ALL_ACHIEVEMENTS};
use daily_tracker::core::catalog::{Category, Difficulty};
use daily_tracker::core::engine::{
    add_task, complete_task, delete_task, reset_progress, start_season, undo_task,
    ProgressionEvent,
};
use daily_tracker::core::ledger::day_key;
use daily_tracker::core::seasons::{season_by_id, season_for_date};
use daily_tracker::core::stats::{daily_activity, TrackerStats};
use daily_tracker::store::TrackerStore;
use daily_tracker::{Error, Result, TrackerState};

#[derive(Parser)]
#[command(name = "daily-tracker")]
#[command(about = "Gamified daily habit tracker - levels, ranks, streaks, achievements")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show level, rank, streak, and today's progress
    Status,

    /// List the task catalog with today's completion marks
    Tasks,

    /// Complete a task for today
    Complete {
        /// Task id from the catalog
        task_id: u32,
    },

    /// Remove one of today's completions (earned rewards are kept)
    Undo {
        /// Task id to un-complete
        task_id: u32,
    },

    /// Add a task to the catalog
    Add {
        /// Display name
        name: String,

        /// common, rare, epic, or legendary
        #[arg(long, default_value = "common")]
        difficulty: String,

        /// Base EXP before the difficulty multiplier (5-200)
        #[arg(long, default_value_t = 10)]
        exp: u64,

        /// fitness, learning, wellness, productivity, mindfulness, creativity, or social
        #[arg(long, default_value = "fitness")]
        category: String,
    },

    /// Delete a task from the catalog (completion history is kept)
    Delete {
        /// Task id to delete
        task_id: u32,
    },

    /// Show the current streak and the last week of activity
    Streak,

    /// Show lifetime statistics
    Stats,

    /// List achievements, earned and locked
    Achievements,

    /// Erase all progress and restore the default catalog
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Start a season: progression resets, the catalog is kept
    Season {
        /// Season id (1-4)
        season_id: u32,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = TrackerStore::new()?;
    let mut state = store.load_or_seed()?;

    let today = Local::now().date_naive();
    let now = Utc::now().timestamp();

    match cli.command {
        Command::Status => print_status(&state, today),
        Command::Tasks => print_tasks(&state, today),
        Command::Complete { task_id } => {
            let events = complete_task(&mut state, task_id, today, now)?;
            print_events(&state, &events);
            store.save(&state)?;
        }
        Command::Undo { task_id } => {
            if undo_task(&mut state, task_id, today) {
                println!("Removed today's completion of task {}.", task_id);
                store.save(&state)?;
            } else {
                println!("No completion of task {} recorded today.", task_id);
            }
        }
        Command::Add {
            name,
            difficulty,
            exp,
            category,
        } => {
            let difficulty = Difficulty::from_str(&difficulty).ok_or_else(|| {
                Error::InvalidInput(format!("unknown difficulty: {}", difficulty))
            })?;
            let category = Category::from_str(&category)
                .ok_or_else(|| Error::InvalidInput(format!("unknown category: {}", category)))?;
            let task = add_task(&mut state, &name, difficulty, exp, category)?;
            println!(
                "Added task [{}] {} ({}, {} EXP)",
                task.id,
                task.name,
                task.difficulty.as_str(),
                task.exp_reward()
            );
            store.save(&state)?;
        }
        Command::Delete { task_id } => {
            let task = delete_task(&mut state, task_id)?;
            println!("Deleted task [{}] {}.", task.id, task.name);
            store.save(&state)?;
        }
        Command::Streak => print_streak(&state, today),
        Command::Stats => print_stats(&state, today),
        Command::Achievements => print_achievements(&state),
        Command::Reset { yes } => {
            if yes {
                reset_progress(&mut state);
                println!("Progress reset. Back to level 1 with the default catalog.");
                store.save(&state)?;
            } else {
                println!("This erases all progress and restores the default catalog.");
                println!("Run again with --yes to confirm.");
            }
        }
        Command::Season { season_id } => {
            start_season(&mut state, season_id)?;
            let name = season_by_id(season_id).map(|s| s.name).unwrap_or("");
            println!(
                "⚔️ Season {} ({}) started. Progression reset, catalog kept.",
                season_id, name
            );
            store.save(&state)?;
        }
    }

    Ok(())
}

fn print_events(state: &TrackerState, events: &[ProgressionEvent]) {
    for event in events {
        match event {
            ProgressionEvent::ExpAwarded { task_id, amount } => {
                let name = state
                    .daily_tasks
                    .get(*task_id)
                    .map(|task| task.name.as_str())
                    .unwrap_or("task");
                println!("✅ {} completed: +{} EXP", name, amount);
            }
            ProgressionEvent::LevelUp { new_level, .. } => {
                println!("🎉 Level up! You are now level {}.", new_level);
            }
            ProgressionEvent::RankUp { new_rank, .. } => {
                println!("🏆 Rank up! You reached {}.", new_rank.as_str());
            }
            ProgressionEvent::AchievementUnlocked(id) => {
                let def = achievement_def(*id);
                println!(
                    "{} Achievement unlocked: {} ({})",
                    def.icon, def.name, def.description
                );
            }
        }
    }
}

fn print_status(state: &TrackerState, today: NaiveDate) {
    let progress = &state.progress;
    let stats = TrackerStats::collect(state, today);

    let season_name = season_by_id(progress.current_season)
        .map(|s| s.name)
        .unwrap_or("Unknown");
    println!("Season {}: {}", progress.current_season, season_name);
    println!("Calendar season today: {}", season_for_date(today).name);
    println!(
        "Level {}  ({}/{} EXP)",
        progress.level, progress.experience, progress.exp_needed
    );
    println!(
        "Rank {}  ({} points)",
        progress.rank.as_str(),
        progress.rank_points
    );
    if let Some((next_rank, remaining)) = stats.points_to_next_rank {
        println!("  {} points to {}", remaining, next_rank.as_str());
    }
    println!("🔥 Streak: {} days", stats.current_streak);
    println!(
        "Today: {} of {} tasks completed",
        stats.today_completed.len(),
        state.daily_tasks.len()
    );
}

fn print_tasks(state: &TrackerState, today: NaiveDate) {
    let done = state.completion_history.completed_on(&day_key(today));
    for task in state.daily_tasks.iter() {
        let mark = if done.contains(&task.id) { "✅" } else { "⭕" };
        println!(
            "{} [{}] {} {}  {} EXP ({})",
            mark,
            task.id,
            task.category.icon(),
            task.name,
            task.exp_reward(),
            task.difficulty.as_str()
        );
    }
}

fn print_streak(state: &TrackerState, today: NaiveDate) {
    let stats = TrackerStats::collect(state, today);
    println!("🔥 Current streak: {} days", stats.current_streak);
    for (day, count) in daily_activity(state, today, 7) {
        let marker = if count > 0 { "✅" } else { "⬜" };
        println!("  {} {}  {} completed", marker, day_key(day), count);
    }
}

fn print_stats(state: &TrackerState, today: NaiveDate) {
    let stats = TrackerStats::collect(state, today);
    println!("Total completions: {}", stats.total_completions);
    println!("Active days: {}", stats.active_days);
    println!("Average per active day: {:.1}", stats.average_per_active_day);
    println!("Current streak: {} days", stats.current_streak);
    println!("EXP earned today: {}", stats.exp_earned_today);
    if let Some((next_rank, remaining)) = stats.points_to_next_rank {
        println!("Points to {}: {}", next_rank.as_str(), remaining);
    }

    if !stats.per_task.is_empty() {
        println!();
        println!("Most completed:");
        for (task_id, count) in &stats.per_task {
            if let Some(task) = state.daily_tasks.get(*task_id) {
                println!("  {}x {}", count, task.name);
            }
        }
    }

    if !stats.per_category.is_empty() {
        println!();
        println!("By category:");
        for (category, count) in &stats.per_category {
            println!("  {} {}: {}", category.icon(), category.as_str(), count);
        }
    }
}

fn print_achievements(state: &TrackerState) {
    println!(
        "Achievements: {} of {} earned",
        state.progress.achievements.len(),
        ALL_ACHIEVEMENTS.len()
    );
    for def in ALL_ACHIEVEMENTS {
        let mark = if state.progress.is_unlocked(def.id) {
            def.icon
        } else {
            "🔒"
        };
        println!("  {} {} ({})", mark, def.name, def.description);
    }
}
