//! Fixed initial data every session starts from.

use crate::profile::{Education, Profile, ProfileStore, Skill};
use crate::project::{ChartDatum, ChartKind, Project, ProjectChart, ProjectKind, ProjectStore};

fn picsum(n: u32) -> String {
    format!("https://picsum.photos/800/600?random={n}")
}

pub fn initial_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Rebranding TechFlow".to_string(),
            category: "Branding".to_string(),
            description: "Redesenho completo da identidade visual da startup TechFlow, aumentando o reconhecimento da marca em 40%.".to_string(),
            kind: ProjectKind::Visual,
            image_url: picsum(1),
            gallery: Some(vec![picsum(10), picsum(11)]),
            charts: None,
            is_visible: true,
        },
        Project {
            id: "2".to_string(),
            title: "Campanha Black Friday".to_string(),
            category: "Performance".to_string(),
            description: "Gestão de tráfego pago resultando em ROAS de 15x durante a semana de ofertas.".to_string(),
            kind: ProjectKind::Analytical,
            image_url: picsum(2),
            gallery: None,
            charts: Some(vec![
                ProjectChart {
                    id: "c1".to_string(),
                    title: "Comparativo de Performance".to_string(),
                    kind: ChartKind::Bar,
                    data: vec![
                        ChartDatum::new("Meta", 120.0),
                        ChartDatum::new("Realizado", 185.0),
                        ChartDatum::new("Ano Anterior", 90.0),
                    ],
                },
                ProjectChart {
                    id: "c2".to_string(),
                    title: "Distribuição de Leads".to_string(),
                    kind: ChartKind::Pie,
                    data: vec![
                        ChartDatum::new("Instagram", 45.0),
                        ChartDatum::new("Google", 30.0),
                        ChartDatum::new("Email", 25.0),
                    ],
                },
            ]),
            is_visible: true,
        },
        Project {
            id: "3".to_string(),
            title: "Lançamento EcoBottle".to_string(),
            category: "Social Media".to_string(),
            description: "Estratégia de conteúdo orgânico e influenciadores para lançamento de produto sustentável.".to_string(),
            kind: ProjectKind::Visual,
            image_url: picsum(3),
            gallery: Some(vec![picsum(12)]),
            charts: None,
            is_visible: true,
        },
    ]
}

pub fn initial_profile() -> Profile {
    Profile {
        name: "Ana Silva".to_string(),
        role: "Especialista em Marketing Digital & Growth Hacking".to_string(),
        bio: "Com mais de 5 anos de experiência no mercado digital, atuo na intersecção entre criatividade e análise de dados.\n\
Minha missão é ajudar empresas a encontrarem sua voz única no ruído digital e converterem essa atenção em crescimento sustentável.\n\n\
Acredito que o marketing moderno não é apenas sobre vender, mas sobre contar histórias que ressoam e criar experiências que fidelizam."
            .to_string(),
        phone: "+55 17 98821-1306".to_string(),
        email: "paulo@growthboost.com.br".to_string(),
        linkedin: None,
    }
}

pub fn initial_skills() -> Vec<Skill> {
    vec![
        Skill::new("1", "SEO & SEM", 90),
        Skill::new("2", "Branding", 85),
        Skill::new("3", "Data Analytics", 95),
        Skill::new("4", "Social Media", 80),
        Skill::new("5", "Paid Traffic", 88),
    ]
}

pub fn initial_education() -> Vec<Education> {
    vec![
        Education::new("1", "ESPM", "MBA em Marketing Digital", "2021 - 2022"),
        Education::new(
            "2",
            "Universidade de São Paulo",
            "Bacharelado em Publicidade",
            "2016 - 2020",
        ),
        Education::new(
            "3",
            "Google Academy",
            "Certificação Google Ads & Analytics",
            "2023",
        ),
    ]
}

/// A project store holding the initial projects.
pub fn seeded_project_store() -> ProjectStore {
    ProjectStore::with_projects(initial_projects())
}

/// A profile store holding the initial profile, skills and education.
pub fn seeded_profile_store() -> ProfileStore {
    ProfileStore::new(initial_profile(), initial_skills(), initial_education())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_payloads_match_kind() {
        for project in initial_projects() {
            match project.kind {
                ProjectKind::Visual => assert!(project.charts.is_none()),
                ProjectKind::Analytical => {
                    assert!(project.gallery.is_none());
                    assert!(
                        project
                            .active_charts()
                            .iter()
                            .all(|c| c.publishable().as_ref() == Some(c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_seed_everything_visible() {
        let store = seeded_profile_store();
        assert_eq!(store.skills().len(), 5);
        assert_eq!(store.education().len(), 3);
        assert!(store.skills().iter().all(|s| s.is_visible));
        assert_eq!(seeded_project_store().len(), 3);
    }
}
