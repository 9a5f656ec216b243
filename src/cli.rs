use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for the E-HUB course portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// API prefix, e.g. http://127.0.0.1:8000/api
    #[arg(long, env = "COURSE_PORTAL_API_URL")]
    pub api_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, env = "COURSE_PORTAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where the session (token + user) is kept
    #[arg(long)]
    pub session_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        username: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and store the session
    Signup {
        username: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Invalidate the session remotely and forget it locally
    Logout,
    /// Show the user behind the stored session
    Whoami,
    /// Show which navigation entries a page would display
    Status,
    /// List courses
    Courses {
        /// Only courses in this category
        #[arg(long)]
        category: Option<String>,
        /// Title and school only
        #[arg(long, default_value_t = false)]
        short: bool,
        /// Also write the list to a timestamped JSON file
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// Show one course
    Course { id: u64 },
    /// Enroll in a course
    Enroll { id: u64 },
    /// Leave a course
    Unenroll { id: u64 },
    /// Courses you are enrolled in
    MyEnrollments,
    /// Courses you author (mentors)
    MyCourses,
    /// Course categories
    Categories,
    /// Create a course from a JSON file (mentors)
    CreateCourse {
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a course with the contents of a JSON file
    UpdateCourse {
        id: u64,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a course
    DeleteCourse { id: u64 },
}
