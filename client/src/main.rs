//! # Moduway CLI
//!
//! Command-line front end over [`moduway::AppContext`]. Session token and
//! comparison basket persist in the file named by `MODUWAY_STORAGE_PATH`.
//!
//! ## Usage
//!
//! ```bash
//! moduway courses [search]
//! moduway course <id>
//! moduway login <username> <password>
//! moduway compare add 12
//! moduway route /community/posts/3
//! ```
//!
//! Responses are printed to stdout as pretty JSON; logs go to stderr.

use std::process::ExitCode;

use moduway::router;
use moduway::{logging, AppContext, ClientConfig, ComparisonItem};
use serde::Serialize;
use shared::{
    CourseId, CourseListParams, KeywordSearchParams, LoginRequest, PostListParams,
    SemanticSearchParams,
};

const USAGE: &str = "\
Usage: moduway <command> [args]

Commands:
  courses [search]              List courses, optionally filtered by text
  course <id>                   Course detail
  search <keyword>              Keyword search
  semantic <query>              Meaning-based search
  login <username> <password>   Sign in and store the session token
  logout                        Revoke and clear the session
  whoami                        Current user
  boards                        Community boards
  posts <board> [page]          Posts of a board
  post <id>                     Post detail
  compare list                  Courses in the comparison basket
  compare add <id>              Add a course to the basket
  compare remove <id>           Remove a course from the basket
  compare clear                 Empty the basket
  route <path>                  Resolve a URL path to a page";

#[derive(Debug, PartialEq)]
enum Command {
    Courses(Option<String>),
    Course(CourseId),
    Search(String),
    Semantic(String),
    Login { username: String, password: String },
    Logout,
    WhoAmI,
    Boards,
    Posts { board: String, page: Option<u32> },
    Post(i64),
    CompareList,
    CompareAdd(CourseId),
    CompareRemove(CourseId),
    CompareClear,
    Route(String),
}

fn parse_id<T: std::str::FromStr>(raw: &str) -> Result<T, String> {
    raw.parse().map_err(|_| format!("Invalid id: {}", raw))
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let command = match args.as_slice() {
        ["courses"] => Command::Courses(None),
        ["courses", search @ ..] => Command::Courses(Some(search.join(" "))),
        ["course", id] => Command::Course(parse_id(id)?),
        ["search", keyword @ ..] if !keyword.is_empty() => Command::Search(keyword.join(" ")),
        ["semantic", query @ ..] if !query.is_empty() => Command::Semantic(query.join(" ")),
        ["login", username, password] => Command::Login {
            username: username.to_string(),
            password: password.to_string(),
        },
        ["logout"] => Command::Logout,
        ["whoami"] => Command::WhoAmI,
        ["boards"] => Command::Boards,
        ["posts", board] => Command::Posts {
            board: board.to_string(),
            page: None,
        },
        ["posts", board, page] => Command::Posts {
            board: board.to_string(),
            page: Some(page.parse().map_err(|_| format!("Invalid page: {}", page))?),
        },
        ["post", id] => Command::Post(parse_id(id)?),
        ["compare", "list"] => Command::CompareList,
        ["compare", "add", id] => Command::CompareAdd(parse_id(id)?),
        ["compare", "remove", id] => Command::CompareRemove(parse_id(id)?),
        ["compare", "clear"] => Command::CompareClear,
        ["route", path] => Command::Route(path.to_string()),
        [] => return Err("Missing command".to_string()),
        _ => return Err(format!("Unknown command: {}", args.join(" "))),
    };

    Ok(command)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(ctx: &AppContext, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Courses(search) => {
            let params = CourseListParams {
                search,
                ..Default::default()
            };
            print_json(&ctx.api.get_course_list(&params).await?.data)?;
        }
        Command::Course(id) => {
            print_json(&ctx.api.get_course_detail(id).await?.data)?;
        }
        Command::Search(search) => {
            let params = KeywordSearchParams {
                search,
                ..Default::default()
            };
            print_json(&ctx.api.search_keyword_courses(&params).await?.data)?;
        }
        Command::Semantic(query) => {
            let params = SemanticSearchParams {
                query,
                ..Default::default()
            };
            print_json(&ctx.api.search_semantic_courses(&params).await?.data)?;
        }
        Command::Login { username, password } => {
            ctx.sign_in(&LoginRequest::with_username(username, password))
                .await?;
            print_json(&ctx.load_user().await?)?;
        }
        Command::Logout => {
            // Revoking needs a token; without one there is nothing to tell the backend
            ctx.sign_out(ctx.auth.is_authenticated()).await;
            println!("Signed out.");
        }
        Command::WhoAmI => match ctx.load_user().await? {
            Some(user) => print_json(&user)?,
            None => println!("Not signed in."),
        },
        Command::Boards => {
            print_json(&ctx.api.get_boards().await?.data)?;
        }
        Command::Posts { board, page } => {
            let params = PostListParams {
                page,
                ..Default::default()
            };
            print_json(&ctx.api.get_posts_by_board_id(&board, &params).await?.data)?;
        }
        Command::Post(id) => {
            print_json(&ctx.api.get_post_detail(id).await?.data)?;
        }
        Command::CompareList => {
            print_json(&ctx.comparison.items())?;
        }
        Command::CompareAdd(id) => {
            let detail = ctx.api.get_course_detail(id).await?;
            ctx.comparison
                .add_item(ComparisonItem::from_course(&detail.data)?);
            print_json(&ctx.comparison.course_ids())?;
        }
        Command::CompareRemove(id) => {
            ctx.comparison.remove_item(id);
            print_json(&ctx.comparison.course_ids())?;
        }
        Command::CompareClear => {
            ctx.comparison.clear();
            print_json(&ctx.comparison.course_ids())?;
        }
        Command::Route(path) => match router::resolve(&path) {
            Some(matched) => print_json(&serde_json::json!({
                "name": matched.entry.name,
                "pattern": matched.entry.path,
                "page": format!("{:?}", matched.page()),
                "params": matched.params,
            }))?,
            None => anyhow::bail!("No route matches {}", path),
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    let config = ClientConfig::from_env()?;
    let _log_guard = logging::init(&config);

    let ctx = AppContext::native(config)?;

    run(&ctx, command).await?;
    Ok(ExitCode::SUCCESS)
}
