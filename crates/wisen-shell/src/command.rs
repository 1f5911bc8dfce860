//! Parsing of REPL input lines into commands.

use anyhow::{Result, anyhow, bail};

use wisen_application::Route;
use wisen_core::profile::ProfileField;
use wisen_core::project::{ChartKind, ProjectKind};

/// Top-level command names offered for completion.
pub const COMMANDS: &[&str] = &[
    "/help",
    "/home",
    "/portfolio",
    "/project",
    "/pricing",
    "/login",
    "/logout",
    "/admin",
    "/profile",
    "/skill",
    "/edu",
    "quit",
];

/// Words accepted after `path`, for completion.
pub fn next_words(path: &[&str]) -> &'static [&'static str] {
    match path {
        [] => COMMANDS,
        ["/admin"] => &[
            "form",
            "new",
            "cancel",
            "edit",
            "title",
            "category",
            "description",
            "image",
            "type",
            "gallery",
            "chart",
            "point",
            "generate",
            "submit",
            "toggle",
            "delete",
        ],
        ["/admin", "type"] => &["visual", "analytical"],
        ["/admin", "gallery"] => &["add", "rm"],
        ["/admin", "chart"] => &["add", "rm", "title", "type"],
        ["/admin", "chart", "type", _] => &["bar", "pie"],
        ["/admin", "point"] => &["add", "rm", "set"],
        ["/profile"] => &["name", "role", "bio", "phone", "email", "linkedin"],
        ["/skill"] => &["add", "name", "level", "toggle", "rm"],
        ["/edu"] => &["add", "institution", "degree", "year", "toggle", "rm"],
        _ => &[],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Navigate(Route),
    Login { email: String, password: String },
    Logout,
    Admin(AdminCommand),
}

/// Text fields of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    Description,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Degree,
    Year,
}

/// Commands that only run behind the admin gate.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminCommand {
    Overview,
    Form,
    Edit(String),
    Cancel,
    Set(FormField, String),
    SetKind(ProjectKind),
    GalleryAdd(Vec<String>),
    GalleryRemove(usize),
    ChartAdd,
    ChartRemove(usize),
    ChartTitle(usize, String),
    ChartKind(usize, ChartKind),
    PointAdd(usize),
    PointRemove(usize, usize),
    PointSet {
        chart: usize,
        point: usize,
        name: String,
        value: f64,
    },
    Generate,
    Submit,
    Toggle(String),
    Delete(String),
    Profile(ProfileField, String),
    SkillAdd,
    SkillName(String, String),
    SkillLevel(String, i64),
    SkillToggle(String),
    SkillRemove(String),
    EducationAdd,
    EducationSet(String, EducationField, String),
    EducationToggle(String),
    EducationRemove(String),
}

/// Word-by-word reader over the arguments of a line.
struct Args<'a> {
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn new(rest: &'a str) -> Self {
        Self { rest }
    }

    fn next(&mut self) -> Option<&'a str> {
        let s = self.rest.trim_start();
        if s.is_empty() {
            return None;
        }
        let end = s.find(char::is_whitespace).unwrap_or(s.len());
        let (word, rest) = s.split_at(end);
        self.rest = rest;
        Some(word)
    }

    fn word(&mut self, what: &str) -> Result<&'a str> {
        self.next().ok_or_else(|| anyhow!("missing {what}"))
    }

    fn index(&mut self, what: &str) -> Result<usize> {
        let word = self.word(what)?;
        word.parse()
            .map_err(|_| anyhow!("{what} must be a number, got '{word}'"))
    }

    /// Everything left on the line, possibly empty.
    fn text(&mut self) -> String {
        let text = self.rest.trim().to_string();
        self.rest = "";
        text
    }
}

pub fn parse(line: &str) -> Result<Command> {
    let mut args = Args::new(line);
    let Some(head) = args.next() else {
        bail!("empty input");
    };

    let command = match head {
        "quit" | "exit" => Command::Quit,
        "/help" => Command::Help,
        "/home" => Command::Navigate(Route::Home),
        "/portfolio" => Command::Navigate(Route::Portfolio),
        "/pricing" => Command::Navigate(Route::Pricing),
        "/project" => Command::Navigate(Route::ProjectDetail(
            args.word("project id")?.to_string(),
        )),
        "/login" => match args.next() {
            None => Command::Navigate(Route::Login),
            Some(email) => Command::Login {
                email: email.to_string(),
                password: args.text(),
            },
        },
        "/logout" => Command::Logout,
        "/admin" => Command::Admin(parse_admin(&mut args)?),
        "/profile" => Command::Admin(parse_profile(&mut args)?),
        "/skill" => Command::Admin(parse_skill(&mut args)?),
        "/edu" => Command::Admin(parse_education(&mut args)?),
        other => bail!("unknown command '{other}', try /help"),
    };
    Ok(command)
}

fn parse_admin(args: &mut Args<'_>) -> Result<AdminCommand> {
    let Some(sub) = args.next() else {
        return Ok(AdminCommand::Overview);
    };

    let command = match sub {
        "form" => AdminCommand::Form,
        "new" | "cancel" => AdminCommand::Cancel,
        "edit" => AdminCommand::Edit(args.word("project id")?.to_string()),
        "title" => AdminCommand::Set(FormField::Title, args.text()),
        "category" => AdminCommand::Set(FormField::Category, args.text()),
        "description" => AdminCommand::Set(FormField::Description, args.text()),
        "image" => AdminCommand::Set(FormField::Image, args.text()),
        "type" => {
            let kind = args.word("project type")?;
            AdminCommand::SetKind(
                kind.parse()
                    .map_err(|_| anyhow!("project type must be visual or analytical"))?,
            )
        }
        "gallery" => match args.word("gallery action")? {
            "add" => {
                let mut images = Vec::new();
                while let Some(image) = args.next() {
                    images.push(image.to_string());
                }
                if images.is_empty() {
                    bail!("missing image reference");
                }
                AdminCommand::GalleryAdd(images)
            }
            "rm" => AdminCommand::GalleryRemove(args.index("image index")?),
            other => bail!("unknown gallery action '{other}'"),
        },
        "chart" => match args.word("chart action")? {
            "add" => AdminCommand::ChartAdd,
            "rm" => AdminCommand::ChartRemove(args.index("chart index")?),
            "title" => {
                let chart = args.index("chart index")?;
                AdminCommand::ChartTitle(chart, args.text())
            }
            "type" => {
                let chart = args.index("chart index")?;
                let kind = args.word("chart type")?;
                AdminCommand::ChartKind(
                    chart,
                    kind.parse()
                        .map_err(|_| anyhow!("chart type must be bar or pie"))?,
                )
            }
            other => bail!("unknown chart action '{other}'"),
        },
        "point" => match args.word("point action")? {
            "add" => AdminCommand::PointAdd(args.index("chart index")?),
            "rm" => {
                let chart = args.index("chart index")?;
                AdminCommand::PointRemove(chart, args.index("point index")?)
            }
            "set" => {
                let chart = args.index("chart index")?;
                let point = args.index("point index")?;
                let value = args.word("value")?;
                let value: f64 = value
                    .parse()
                    .map_err(|_| anyhow!("value must be a number, got '{value}'"))?;
                AdminCommand::PointSet {
                    chart,
                    point,
                    name: args.text(),
                    value,
                }
            }
            other => bail!("unknown point action '{other}'"),
        },
        "generate" => AdminCommand::Generate,
        "submit" | "save" => AdminCommand::Submit,
        "toggle" => AdminCommand::Toggle(args.word("project id")?.to_string()),
        "delete" => AdminCommand::Delete(args.word("project id")?.to_string()),
        other => bail!("unknown admin action '{other}'"),
    };
    Ok(command)
}

fn parse_profile(args: &mut Args<'_>) -> Result<AdminCommand> {
    let field = args.word("profile field")?;
    let field: ProfileField = field
        .parse()
        .map_err(|_| anyhow!("unknown profile field '{field}'"))?;
    Ok(AdminCommand::Profile(field, args.text()))
}

fn parse_skill(args: &mut Args<'_>) -> Result<AdminCommand> {
    let command = match args.word("skill action")? {
        "add" => AdminCommand::SkillAdd,
        "name" => {
            let id = args.word("skill id")?.to_string();
            AdminCommand::SkillName(id, args.text())
        }
        "level" => {
            let id = args.word("skill id")?.to_string();
            let level = args.word("level")?;
            let level: i64 = level
                .parse()
                .map_err(|_| anyhow!("level must be a number, got '{level}'"))?;
            AdminCommand::SkillLevel(id, level)
        }
        "toggle" => AdminCommand::SkillToggle(args.word("skill id")?.to_string()),
        "rm" => AdminCommand::SkillRemove(args.word("skill id")?.to_string()),
        other => bail!("unknown skill action '{other}'"),
    };
    Ok(command)
}

fn parse_education(args: &mut Args<'_>) -> Result<AdminCommand> {
    let action = args.word("education action")?;
    let field = match action {
        "add" => return Ok(AdminCommand::EducationAdd),
        "toggle" => {
            return Ok(AdminCommand::EducationToggle(
                args.word("education id")?.to_string(),
            ));
        }
        "rm" => {
            return Ok(AdminCommand::EducationRemove(
                args.word("education id")?.to_string(),
            ));
        }
        "institution" => EducationField::Institution,
        "degree" => EducationField::Degree,
        "year" => EducationField::Year,
        other => bail!("unknown education action '{other}'"),
    };
    let id = args.word("education id")?.to_string();
    Ok(AdminCommand::EducationSet(id, field, args.text()))
}
