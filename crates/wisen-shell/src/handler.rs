//! Runs parsed commands against the session and prints the result.

use anyhow::Result;
use colored::Colorize;

use wisen_application::Route;
use wisen_application::Site;
use wisen_application::editor::{ProjectEditor, SubmitOutcome};
use wisen_application::views::{self, HomeView, ProjectDetailView};
use wisen_core::project::ProjectKind;

use crate::command::{AdminCommand, Command, EducationField, FormField};

const BAR_WIDTH: usize = 20;

/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn handle(site: &mut Site, command: Command) -> Result<Flow> {
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => print_help(),
        Command::Navigate(route) => navigate(site, route),
        Command::Login { email, password } => {
            println!("{}", "Entrando...".bright_black());
            if site.login(&email, &password).await {
                println!("{}", "Login realizado.".bright_green());
                navigate(site, Route::Admin);
            } else {
                println!("{}", "Informe e-mail e senha.".red());
            }
        }
        Command::Logout => {
            site.logout().await;
            println!("{}", "Sessão encerrada.".bright_green());
        }
        Command::Admin(admin) => {
            if site.resolve(Route::Admin) != Route::Admin {
                print_login_hint();
            } else {
                handle_admin(site, admin).await?;
            }
        }
    }
    Ok(Flow::Continue)
}

fn navigate(site: &Site, route: Route) {
    match site.resolve(route) {
        Route::Home => print_home(&views::home_view(site.profile())),
        Route::Portfolio => print_portfolio(site),
        Route::ProjectDetail(id) => print_detail(&views::project_detail(site.projects(), &id)),
        Route::Pricing => println!("{}", "Planos e serviços sob consulta.".bright_black()),
        Route::Login => print_login_hint(),
        Route::Admin => print_admin_overview(site),
    }
}

async fn handle_admin(site: &mut Site, command: AdminCommand) -> Result<()> {
    match command {
        AdminCommand::Overview => print_admin_overview(site),
        AdminCommand::Form => print_form(site.editor()),
        AdminCommand::Edit(id) => {
            site.begin_edit(&id)?;
            print_form(site.editor());
        }
        AdminCommand::Cancel => {
            site.editor_mut().cancel();
            println!("{}", "Formulário limpo.".bright_black());
        }
        AdminCommand::Set(field, value) => {
            let editor = site.editor_mut();
            match field {
                FormField::Title => editor.set_title(value),
                FormField::Category => editor.set_category(value),
                FormField::Description => editor.set_description(value),
                FormField::Image => editor.set_image_url(value),
            }
        }
        AdminCommand::SetKind(kind) => site.editor_mut().set_kind(kind),
        AdminCommand::GalleryAdd(images) => site.editor_mut().add_gallery_images(images),
        AdminCommand::GalleryRemove(index) => site.editor_mut().remove_gallery_image(index),
        AdminCommand::ChartAdd => site.editor_mut().add_chart_block(),
        AdminCommand::ChartRemove(index) => site.editor_mut().remove_chart_block(index),
        AdminCommand::ChartTitle(index, title) => site.editor_mut().set_chart_title(index, title),
        AdminCommand::ChartKind(index, kind) => site.editor_mut().set_chart_kind(index, kind),
        AdminCommand::PointAdd(chart) => site.editor_mut().add_data_point(chart),
        AdminCommand::PointRemove(chart, point) => {
            site.editor_mut().remove_data_point(chart, point)
        }
        AdminCommand::PointSet {
            chart,
            point,
            name,
            value,
        } => {
            let editor = site.editor_mut();
            editor.set_data_point_name(chart, point, name);
            editor.set_data_point_value(chart, point, value);
        }
        AdminCommand::Generate => {
            println!("{}", "Gerando descrição...".bright_black());
            site.generate_description().await?;
            println!("{}", site.editor().form().description.bright_blue());
        }
        AdminCommand::Submit => {
            let outcome = site.submit_project();
            if let Some(notice) = site.editor().notice() {
                println!("{}", notice.bright_green());
            }
            let (SubmitOutcome::Created { id } | SubmitOutcome::Updated { id }) = outcome;
            println!("{}", format!("id: {id}").bright_black());
        }
        AdminCommand::Toggle(id) => {
            site.projects_mut().toggle_visibility(&id);
            print_admin_overview(site);
        }
        AdminCommand::Delete(id) => {
            site.projects_mut().delete(&id);
            print_admin_overview(site);
        }
        AdminCommand::Profile(field, value) => {
            let (resume, store) = site.resume_mut();
            resume.set_profile_field(store, field, value);
            print_home(&views::home_view(site.profile()));
        }
        AdminCommand::SkillAdd => {
            let (resume, store) = site.resume_mut();
            let id = resume.add_skill(store);
            println!("{}", format!("Nova habilidade: {id}").bright_green());
        }
        AdminCommand::SkillName(id, name) => {
            let (resume, store) = site.resume_mut();
            report_missing(resume.set_skill_name(store, &id, &name), &id);
        }
        AdminCommand::SkillLevel(id, level) => {
            let (resume, store) = site.resume_mut();
            report_missing(resume.set_skill_level(store, &id, level), &id);
        }
        AdminCommand::SkillToggle(id) => {
            let (resume, store) = site.resume_mut();
            report_missing(resume.toggle_skill_visibility(store, &id), &id);
        }
        AdminCommand::SkillRemove(id) => {
            let (resume, store) = site.resume_mut();
            report_missing(resume.delete_skill(store, &id), &id);
        }
        AdminCommand::EducationAdd => {
            let (resume, store) = site.resume_mut();
            let id = resume.add_education(store);
            println!("{}", format!("Nova formação: {id}").bright_green());
        }
        AdminCommand::EducationSet(id, field, value) => {
            let (resume, store) = site.resume_mut();
            let found = match field {
                EducationField::Institution => {
                    resume.set_education_institution(store, &id, &value)
                }
                EducationField::Degree => resume.set_education_degree(store, &id, &value),
                EducationField::Year => resume.set_education_year(store, &id, &value),
            };
            report_missing(found, &id);
        }
        AdminCommand::EducationToggle(id) => {
            let (resume, store) = site.resume_mut();
            report_missing(resume.toggle_education_visibility(store, &id), &id);
        }
        AdminCommand::EducationRemove(id) => {
            let (resume, store) = site.resume_mut();
            report_missing(resume.delete_education(store, &id), &id);
        }
    }
    Ok(())
}

fn report_missing(found: bool, id: &str) {
    if !found {
        println!("{}", format!("Nenhum item com id {id}").yellow());
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn print_help() {
    println!("{}", "Páginas".bright_magenta().bold());
    println!("  /home  /portfolio  /project <id>  /pricing");
    println!("  /login <email> <senha>  /logout");
    println!("{}", "Painel (requer login)".bright_magenta().bold());
    println!("  /admin [form|new|edit <id>|toggle <id>|delete <id>|submit|generate]");
    println!("  /admin title|category|description|image <texto>");
    println!("  /admin type visual|analytical");
    println!("  /admin gallery add <url...> | gallery rm <i>");
    println!("  /admin chart add | chart rm <i> | chart title <i> <texto> | chart type <i> bar|pie");
    println!("  /admin point add <i> | point rm <i> <j> | point set <i> <j> <valor> <nome>");
    println!("  /profile name|role|bio|phone|email|linkedin <texto>");
    println!("  /skill add | name <id> <texto> | level <id> <0-100> | toggle <id> | rm <id>");
    println!("  /edu add | institution|degree|year <id> <texto> | toggle <id> | rm <id>");
    println!("  quit");
}

fn print_login_hint() {
    println!(
        "{}",
        "Acesso restrito. Use /login <email> <senha>.".yellow()
    );
}

fn print_home(view: &HomeView) {
    let profile = &view.profile;
    println!("{}", profile.name.bright_magenta().bold());
    println!("{}", profile.role.bright_white());
    println!();
    for line in profile.bio.lines() {
        println!("{line}");
    }
    println!();

    for skill in &view.skills {
        let filled = filled_cells(skill.level, skill.full);
        println!(
            "  {:<18} {}{} {:>3}%",
            skill.name,
            "█".repeat(filled).bright_cyan(),
            "░".repeat(BAR_WIDTH - filled).bright_black(),
            skill.level
        );
    }
    println!();

    for entry in &view.education {
        println!(
            "  {} {} {}",
            entry.degree.bright_white(),
            format!("· {}", entry.institution).bright_black(),
            format!("({})", entry.year).bright_black()
        );
    }
    println!();

    if let Some(link) = &view.contact.whatsapp {
        println!("  WhatsApp: {}", link.bright_blue());
    }
    if let Some(link) = &view.contact.email {
        println!("  E-mail:   {}", link.bright_blue());
    }
    if let Some(linkedin) = &profile.linkedin {
        println!("  LinkedIn: {}", linkedin.bright_blue());
    }
}

/// Cells of a level bar to fill, never more than the bar holds.
fn filled_cells(level: u8, full: u8) -> usize {
    let level = level.min(full);
    (usize::from(level) * BAR_WIDTH)
        .checked_div(usize::from(full))
        .unwrap_or(0)
}

fn print_portfolio(site: &Site) {
    let projects = views::portfolio_listing(site.projects());
    if projects.is_empty() {
        println!("{}", "Nenhum projeto publicado.".bright_black());
        return;
    }
    for project in projects {
        println!(
            "  [{}] {} {}",
            project.id.bright_black(),
            project.title.bright_white().bold(),
            format!("({})", project.category).bright_black()
        );
    }
}

fn print_detail(view: &ProjectDetailView) {
    let ProjectDetailView::Found(detail) = view else {
        println!("{}", "Projeto não encontrado.".red());
        return;
    };

    let project = &detail.project;
    println!("{}", project.title.bright_magenta().bold());
    println!("{}", project.category.bright_black());
    println!("{}", project.description);
    println!("  capa: {}", project.image_url.bright_blue());

    for image in &detail.gallery {
        println!("  - {}", image.bright_blue());
    }

    if !detail.highlights.is_empty() {
        let cards: Vec<String> = detail
            .highlights
            .iter()
            .map(|d| format!("{}: {}", d.name, d.value))
            .collect();
        println!("{}", cards.join("  |  ").bright_yellow());
    }

    for chart in &detail.charts {
        println!("{}", format!("{} ({})", chart.title, chart.kind).bright_white());
        for datum in &chart.data {
            println!("  {:<20} {:>8} {}", datum.name, datum.value, datum.color.bright_black());
        }
    }
}

fn print_admin_overview(site: &Site) {
    println!("{}", "Painel administrativo".bright_magenta().bold());
    for project in site.projects().all() {
        let status = if project.is_visible {
            "visível".green()
        } else {
            "oculto".bright_black()
        };
        println!(
            "  [{}] {} {} {}",
            project.id.bright_black(),
            project.title,
            format!("({})", project.kind).bright_black(),
            status
        );
    }
    print_form(site.editor());
}

fn print_form(editor: &ProjectEditor) {
    let heading = if editor.is_editing() {
        "Editando projeto"
    } else {
        "Novo projeto"
    };
    let form = editor.form();
    println!("{}", heading.bright_cyan());
    println!("  título:    {}", form.title);
    println!("  categoria: {}", form.category);
    println!("  tipo:      {}", form.kind);
    println!("  descrição: {}", form.description);
    println!("  capa:      {}", form.image_url);

    match form.kind {
        ProjectKind::Visual => {
            for (i, image) in editor.gallery().iter().enumerate() {
                println!("  galeria[{i}]: {image}");
            }
        }
        ProjectKind::Analytical => {
            for (i, chart) in editor.chart_blocks().iter().enumerate() {
                println!("  gráfico[{i}] {} ({})", chart.title, chart.kind);
                for (j, datum) in chart.data.iter().enumerate() {
                    println!("    [{j}] {} = {}", datum.name, datum.value);
                }
            }
        }
    }

    if editor.is_loading() {
        println!("{}", "  gerando descrição...".bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wisen_core::config::AppConfig;
    use wisen_infrastructure::MemoryStorage;

    use crate::command::parse;

    async fn site() -> Site {
        let mut config = AppConfig::default();
        config.auth.login_delay_ms = 0;
        Site::start(config, Arc::new(MemoryStorage::new()), None).await
    }

    async fn run(site: &mut Site, line: &str) -> Result<Flow> {
        handle(site, parse(line)?).await
    }

    #[test]
    fn test_filled_cells_never_exceed_bar() {
        assert_eq!(filled_cells(0, 100), 0);
        assert_eq!(filled_cells(50, 100), BAR_WIDTH / 2);
        assert_eq!(filled_cells(100, 100), BAR_WIDTH);
        assert_eq!(filled_cells(255, 100), BAR_WIDTH);
        assert_eq!(filled_cells(10, 0), 0);
    }

    #[tokio::test]
    async fn test_resume_commands_are_gated() {
        let mut site = site().await;
        let profile = site.profile().profile().clone();
        let skills = site.profile().skills().to_vec();
        let education = site.profile().education().to_vec();

        for line in [
            "/profile name Outra Pessoa",
            "/skill add",
            "/skill rm 1",
            "/edu add",
            "/edu rm 1",
        ] {
            assert_eq!(run(&mut site, line).await.unwrap(), Flow::Continue);
        }

        assert_eq!(site.profile().profile(), &profile);
        assert_eq!(site.profile().skills(), skills.as_slice());
        assert_eq!(site.profile().education(), education.as_slice());
    }

    #[tokio::test]
    async fn test_resume_commands_apply_after_login() {
        let mut site = site().await;
        run(&mut site, "/login a@b.com pw").await.unwrap();
        assert!(site.is_authenticated());

        run(&mut site, "/profile name Outra Pessoa").await.unwrap();
        run(&mut site, "/skill rm 1").await.unwrap();
        run(&mut site, "/edu add").await.unwrap();

        assert_eq!(site.profile().profile().name, "Outra Pessoa");
        assert!(site.profile().skills().iter().all(|s| s.id != "1"));
        assert_eq!(site.profile().education().len(), 4);
    }

    #[tokio::test]
    async fn test_oversized_skill_level_renders() {
        let mut site = site().await;
        run(&mut site, "/login a@b.com pw").await.unwrap();

        let (_, store) = site.resume_mut();
        let mut skills = store.skills().to_vec();
        skills[0].level = 250;
        store.update_skills(skills);

        assert_eq!(run(&mut site, "/home").await.unwrap(), Flow::Continue);
    }

    #[tokio::test]
    async fn test_quit_stops_the_loop() {
        let mut site = site().await;
        assert_eq!(run(&mut site, "quit").await.unwrap(), Flow::Quit);
    }
}
