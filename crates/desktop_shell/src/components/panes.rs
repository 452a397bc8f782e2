use super::*;
use portfolio_content::Project;

const OTHER_PROJECTS_LABEL: &str = "Other Projects";
const CARD_STACK_LIMIT: usize = 3;
const CARD_TAG_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy)]
struct PaneEntry {
    heading: &'static str,
    organization: &'static str,
    period: &'static str,
    details: &'static [&'static str],
}

const EDUCATION_ENTRIES: [PaneEntry; 1] = [PaneEntry {
    heading: "Master of Science in Computer Science",
    organization: "University of Technology",
    period: "2020 - 2022",
    details: &[
        "Specialization in Computer Graphics and Virtual Reality",
        "Thesis: \"Real-time Ray Tracing in WebGL Applications\"",
        "GPA: 3.8/4.0",
    ],
}];

const EDUCATION_COURSEWORK: [&str; 5] = [
    "Advanced Computer Graphics",
    "Virtual and Augmented Reality",
    "Machine Learning",
    "Distributed Systems",
    "Human-Computer Interaction",
];

const EXPERIENCE_ENTRIES: [PaneEntry; 1] = [PaneEntry {
    heading: "Senior XR Developer",
    organization: "TechVision Studios",
    period: "Jan 2023 - Present",
    details: &[
        "Lead development of immersive VR/AR experiences for enterprise clients",
        "Architected and implemented WebXR applications using Three.js and A-Frame",
        "Collaborated with design teams to create intuitive 3D user interfaces",
        "Mentored junior developers and conducted code reviews",
    ],
}];

const EXPERIENCE_TECHNOLOGIES: &str = "Unity, Unreal Engine, WebXR, Three.js, C#, JavaScript";

const ABOUT_INTRO: &str = "Hello! I'm a passionate XR Developer and Computer Graphics \
     enthusiast with a love for creating immersive digital experiences. I specialize in \
     building cutting-edge applications that bridge the gap between the physical and \
     digital worlds.";

const ABOUT_FOCUS_AREAS: [(&str, &str); 4] = [
    (
        "Virtual Reality (VR)",
        "applications for training, education, and entertainment",
    ),
    (
        "Augmented Reality (AR)",
        "experiences for mobile and web platforms",
    ),
    ("WebXR", "applications that run seamlessly across devices"),
    (
        "Interactive 3D",
        "web experiences using modern web technologies",
    ),
];

#[component]
pub(super) fn EducationPane() -> impl IntoView {
    view! {
        <article class="static-pane">
            <h1>"Education"</h1>
            {EDUCATION_ENTRIES.into_iter().map(pane_entry_view).collect::<Vec<_>>()}
            <h3>"Relevant Coursework"</h3>
            <ul class="pane-list">
                {EDUCATION_COURSEWORK
                    .into_iter()
                    .map(|course| view! { <li>{course}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}

#[component]
pub(super) fn ExperiencePane() -> impl IntoView {
    view! {
        <article class="static-pane">
            <h1>"Professional Experience"</h1>
            {EXPERIENCE_ENTRIES.into_iter().map(pane_entry_view).collect::<Vec<_>>()}
            <p class="pane-technologies">
                <strong>"Technologies: "</strong>
                {EXPERIENCE_TECHNOLOGIES}
            </p>
        </article>
    }
}

#[component]
pub(super) fn AboutPane() -> impl IntoView {
    view! {
        <article class="static-pane">
            <h1>"About Me"</h1>
            <p class="pane-intro">{ABOUT_INTRO}</p>
            <h2>"What I Do"</h2>
            <p>"I focus on developing:"</p>
            <ul class="pane-list">
                {ABOUT_FOCUS_AREAS
                    .into_iter()
                    .map(|(area, description)| {
                        view! {
                            <li>
                                <strong>{area}</strong>
                                " "
                                {description}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}

#[component]
/// Searchable, category-grouped listing of every loaded project.
pub(super) fn ProjectBrowser() -> impl IntoView {
    let desktop = use_desktop();
    let query = create_rw_signal(String::new());

    let groups = create_memo(move |_| {
        let query = query.get();
        let matching = desktop
            .projects
            .get()
            .into_iter()
            .filter(|project| matches_search(project, &query))
            .collect::<Vec<_>>();
        group_projects_by_category(&matching)
    });

    view! {
        <div class="project-browser">
            <header class="project-browser-header">
                <h2>"Projects"</h2>
                <label class="project-search">
                    <Icon icon=IconName::Search size=IconSize::Sm />
                    <input
                        type="search"
                        placeholder="Search projects..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </label>
            </header>
            <div class="project-browser-groups">
                <Show
                    when=move || !groups.get().is_empty()
                    fallback=|| {
                        view! {
                            <p class="project-browser-empty">
                                "No projects found matching your search."
                            </p>
                        }
                    }
                >
                    <For
                        each=move || groups.get()
                        key=|(category, _)| category.clone()
                        let:group
                    >
                        <ProjectCategorySection category=group.0 projects=group.1 />
                    </For>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ProjectCategorySection(category: String, projects: Vec<Project>) -> impl IntoView {
    view! {
        <section class="project-category">
            <h3 class="project-category-title">{category}</h3>
            <div class="project-category-grid">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let desktop = use_desktop();
    let stack_overflow = project.stack.len().saturating_sub(CARD_STACK_LIMIT);
    let launch = {
        let project = project.clone();
        move |_| desktop.launch_project(project.clone(), desktop_viewport(DOCK_HEIGHT_PX))
    };

    view! {
        <button class="project-card" on:click=launch>
            {project.cover.clone().map(|cover| {
                view! { <img class="project-card-cover" src=cover alt=project.title.clone() /> }
            })}
            <span class="project-card-title">
                <Icon icon=IconName::DocumentText size=IconSize::Sm />
                {project.title.clone()}
            </span>
            <span class="project-card-chips">
                {project
                    .stack
                    .iter()
                    .take(CARD_STACK_LIMIT)
                    .map(|tech| view! { <span class="project-chip">{tech.clone()}</span> })
                    .collect::<Vec<_>>()}
                {(stack_overflow > 0)
                    .then(|| view! { <span class="project-chip-muted">{format!("+{stack_overflow}")}</span> })}
            </span>
            {(!project.tags.is_empty())
                .then(|| {
                    view! {
                        <span class="project-card-chips">
                            {project
                                .tags
                                .iter()
                                .take(CARD_TAG_LIMIT)
                                .map(|tag| {
                                    view! {
                                        <span class="project-chip-muted">{format!("#{tag}")}</span>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </span>
                    }
                })}
        </button>
    }
}

#[component]
/// Full record for a single project: header, cover, body, and gallery.
pub(super) fn ProjectDetailPane(project: Project) -> impl IntoView {
    view! {
        <article class="project-detail">
            <header class="project-detail-header">
                <h1>{project.title.clone()}</h1>
                <div class="project-detail-chips">
                    {project
                        .stack
                        .iter()
                        .map(|tech| view! { <span class="project-chip">{tech.clone()}</span> })
                        .collect::<Vec<_>>()}
                </div>
                {(!project.tags.is_empty())
                    .then(|| {
                        view! {
                            <div class="project-detail-chips">
                                {project
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="project-chip-muted">{format!("#{tag}")}</span>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
                {(!project.links.is_empty())
                    .then(|| {
                        view! {
                            <div class="project-detail-links">
                                {project
                                    .links
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                class="project-link"
                                                href=link.href.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                <Icon icon=IconName::Link size=IconSize::Sm />
                                                <span>{link.label.clone()}</span>
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
            </header>
            {project.cover.clone().map(|cover| {
                view! {
                    <img class="project-detail-cover" src=cover alt=project.title.clone() />
                }
            })}
            <ProjectBody body=project.body.clone() />
            {(!project.gallery.is_empty())
                .then(|| {
                    view! {
                        <section class="project-detail-gallery">
                            <h3>"Gallery"</h3>
                            <div class="project-gallery-grid">
                                {project
                                    .gallery
                                    .iter()
                                    .enumerate()
                                    .map(|(index, image)| {
                                        view! {
                                            <img
                                                src=image.clone()
                                                alt=format!("{} gallery {}", project.title, index + 1)
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    }
                })}
        </article>
    }
}

#[component]
// Document bodies stay as authored markdown text; styling is left to the stylesheet.
fn ProjectBody(body: String) -> impl IntoView {
    view! { <pre class="project-body">{body}</pre> }
}

fn pane_entry_view(entry: PaneEntry) -> impl IntoView {
    view! {
        <section class="pane-entry">
            <h2>{entry.heading}</h2>
            <p class="pane-entry-meta">
                <strong>{entry.organization}</strong>
                <span class="pane-entry-period">{entry.period}</span>
            </p>
            <ul class="pane-list">
                {entry
                    .details
                    .iter()
                    .map(|detail| view! { <li>{*detail}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

/// Buckets projects by category in order of first appearance. Projects with no
/// category land in a trailing group of their own.
fn group_projects_by_category(projects: &[Project]) -> Vec<(String, Vec<Project>)> {
    let mut groups: Vec<(String, Vec<Project>)> = Vec::new();
    let mut uncategorized: Vec<Project> = Vec::new();

    for project in projects {
        let Some(category) = project.category.as_ref().filter(|name| !name.is_empty()) else {
            uncategorized.push(project.clone());
            continue;
        };
        match groups
            .iter()
            .position(|(name, _)| name.as_str() == category.as_str())
        {
            Some(index) => groups[index].1.push(project.clone()),
            None => groups.push((category.clone(), vec![project.clone()])),
        }
    }

    if !uncategorized.is_empty() {
        groups.push((OTHER_PROJECTS_LABEL.to_string(), uncategorized));
    }
    groups
}

/// Case-insensitive substring match against the title and stack entries. A
/// blank query matches everything.
fn matches_search(project: &Project, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(&query)
        || project
            .stack
            .iter()
            .any(|tech| tech.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(slug: &str, title: &str, category: Option<&str>, stack: &[&str]) -> Project {
        Project {
            slug: slug.to_owned(),
            title: title.to_owned(),
            stack: stack.iter().map(|tech| tech.to_string()).collect(),
            tags: Vec::new(),
            category: category.map(str::to_owned),
            cover: None,
            gallery: Vec::new(),
            links: Vec::new(),
            body: String::new(),
        }
    }

    fn group_names(groups: &[(String, Vec<Project>)]) -> Vec<&str> {
        groups.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn groups_follow_first_appearance_order() {
        let projects = [
            project("ray", "Ray Tracer", Some("Graphics"), &[]),
            project("vr-lab", "VR Lab", Some("XR"), &[]),
            project("mesh", "Mesh Viewer", Some("Graphics"), &[]),
        ];

        let groups = group_projects_by_category(&projects);

        assert_eq!(group_names(&groups), ["Graphics", "XR"]);
        let members: Vec<&str> = groups[0].1.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(members, ["ray", "mesh"]);
    }

    #[test]
    fn uncategorized_projects_trail_in_their_own_group() {
        let projects = [
            project("stray", "Stray", None, &[]),
            project("vr-lab", "VR Lab", Some("XR"), &[]),
            project("blank", "Blank", Some(""), &[]),
        ];

        let groups = group_projects_by_category(&projects);

        assert_eq!(group_names(&groups), ["XR", "Other Projects"]);
        let members: Vec<&str> = groups[1].1.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(members, ["stray", "blank"]);
    }

    #[test]
    fn grouping_an_empty_list_yields_no_groups() {
        assert_eq!(group_projects_by_category(&[]).len(), 0);
    }

    #[test]
    fn blank_queries_match_every_project() {
        let sample = project("ray", "Ray Tracer", None, &["WebGL"]);

        assert!(matches_search(&sample, ""));
        assert!(matches_search(&sample, "   "));
    }

    #[test]
    fn search_matches_titles_case_insensitively() {
        let sample = project("ray", "Ray Tracer", None, &[]);

        assert!(matches_search(&sample, "RAY"));
        assert!(matches_search(&sample, "tracer"));
        assert!(!matches_search(&sample, "voxel"));
    }

    #[test]
    fn search_reaches_into_the_stack() {
        let sample = project("vr-lab", "VR Lab", None, &["Three.js", "WebXR"]);

        assert!(matches_search(&sample, "three"));
        assert!(matches_search(&sample, "webxr"));
        assert!(!matches_search(&sample, "unity"));
    }

    #[test]
    fn search_ignores_surrounding_whitespace() {
        let sample = project("vr-lab", "VR Lab", None, &["WebXR"]);

        assert!(matches_search(&sample, "  webxr  "));
    }
}
