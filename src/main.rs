mod cli;

use clap::Parser;
use course_portal_core::app::{
    check_auth_status, current_user, login, logout, print, require_auth, signup, LogNavigator,
    NavBindings,
};
use course_portal_core::config::{default_config_file, ClientConfig};
use course_portal_core::error::{ErrorKind, Result};
use course_portal_core::model::structs::{courses_from_value, CategoryList, Course};
use course_portal_core::session::FileSessionStore;
use course_portal_core::{ApiClient, HttpClient, NoWasmClient};
use serde_json::Value;
use std::path::Path;

use cli::{Args, Command};

type Api = ApiClient<NoWasmClient, FileSessionStore, LogNavigator>;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        match e.status() {
            Some(401) => eprintln!("Not logged in (session cleared). Run `course-portal login <username>`."),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_config(args: &Args) -> Result<ClientConfig> {
    let config = match args.config.clone().or_else(default_config_file) {
        Some(path) => ClientConfig::load_from_file(&path)?,
        None => ClientConfig::default(),
    };
    Ok(config
        .with_base_url(args.api_url.clone())
        .with_session_file(args.session_file.clone()))
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let store = FileSessionStore::new(config.session_path()?);
    log::debug!("api: {}, session: {}", config.base_url, store.path().display());

    let api: Api = ApiClient::new(NoWasmClient::new().await?, store, LogNavigator, &config);

    match args.command {
        Command::Login { username, password } => {
            let password = match password {
                Some(password) => password,
                None => prompt("Password")?,
            };
            let auth = login(&api, &username, &password).await?;
            println!("Login success!");
            print::print_user(&auth.typed_user()?);
        }
        Command::Signup { username, email } => {
            let password = prompt("Password")?;
            let password2 = prompt("Confirm Password")?;
            if password != password2 {
                return Err(ErrorKind::ParseError("Passwords do not match".to_string()).into());
            }
            let auth = signup(&api, &username, &email, &password, &password2).await?;
            println!("User {} created successfully!", auth.typed_user()?.username);
        }
        Command::Logout => {
            logout(&api).await?;
            println!("Logged out.");
        }
        Command::Whoami => {
            if require_auth(&api)? {
                match current_user(&api).await? {
                    Some(user) => print::print_user(&user),
                    None => println!("No user returned."),
                }
            } else {
                println!("Not logged in.");
            }
        }
        Command::Status => {
            let nav = NavBindings::in_memory();
            let status = check_auth_status(api.store(), &nav)?;
            if let Some(name) = nav.user_profile.as_ref().and_then(|p| p.text()) {
                println!("user: {name}");
            }
            println!(
                "{}: {}",
                if status.is_authenticated() { "logged in" } else { "anonymous" },
                nav.visible_ids().join(", ")
            );
        }
        Command::Courses {
            category,
            short,
            save,
        } => {
            let resp = match category {
                Some(category) => api.get_courses_by_category(&category).await?,
                None => api.get_courses().await?,
            };
            let courses = courses_from_value(resp)?;
            print::print_courses(&courses, short);
            if save {
                let path = print::save_courses_json(&courses)?;
                println!("Json saved to: {}", path.display());
            }
        }
        Command::Course { id } => {
            if let Some(value) = api.get_course(id).await? {
                let course: Course = serde_json::from_value(value)?;
                print::print_course(&course);
            }
        }
        Command::Enroll { id } => {
            print::print_message(api.enroll_course(id).await?.as_ref());
        }
        Command::Unenroll { id } => {
            print::print_message(api.unenroll_course(id).await?.as_ref());
        }
        Command::MyEnrollments => {
            require_signed_in(&api)?;
            let courses = courses_from_value(api.get_my_enrollments().await?)?;
            print::print_courses(&courses, false);
        }
        Command::MyCourses => {
            require_signed_in(&api)?;
            let courses = courses_from_value(api.get_my_courses().await?)?;
            print::print_courses(&courses, false);
        }
        Command::Categories => {
            let list: CategoryList = match api.get_categories().await? {
                Some(value) => serde_json::from_value(value)?,
                None => CategoryList::default(),
            };
            for category in list.categories {
                println!("{category}");
            }
        }
        Command::CreateCourse { file } => {
            let body = read_json(&file)?;
            let created = api.create_course(&body).await?;
            println!("Course created.");
            if let Some(value) = created {
                print::print_course(&serde_json::from_value(value)?);
            }
        }
        Command::UpdateCourse { id, file } => {
            let body = read_json(&file)?;
            api.update_course(id, &body).await?;
            println!("Course {id} updated.");
        }
        Command::DeleteCourse { id } => {
            api.delete_course(id).await?;
            println!("Course {id} deleted.");
        }
    }

    Ok(())
}

fn require_signed_in(api: &Api) -> Result<()> {
    if require_auth(api)? {
        Ok(())
    } else {
        Err(ErrorKind::ApiError(401).into())
    }
}

fn read_json(path: &Path) -> Result<Value> {
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    std::io::Write::flush(&mut std::io::stdout())?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
