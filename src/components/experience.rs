use leptos::prelude::*;

/// Skill list entry: name plus an optional experience note.
struct Skill {
    name: &'static str,
    note: Option<&'static str>,
}

const CURRENT_SKILLS: &[Skill] = &[
    Skill { name: "React.js", note: Some("3+ Years Experienced") },
    Skill { name: "HTML", note: Some("3+ Years Experienced") },
    Skill { name: "CSS", note: Some("3+ Years Experienced") },
    Skill { name: "JavaScript", note: Some("3+ Years Experienced") },
    Skill { name: "Bootstrap", note: Some("1+ Years Experienced") },
    Skill { name: "WordPress", note: Some("1+ Years Experienced") },
    Skill { name: "SQL", note: Some("1+ Years Experienced") },
];

const LEARNING_SKILLS: &[Skill] = &[
    Skill { name: "Python", note: None },
    Skill { name: "NumPy", note: None },
    Skill { name: "Pandas", note: None },
    Skill { name: "Scikit-learn", note: None },
    Skill { name: "Matplotlib", note: None },
    Skill { name: "Seaborn", note: None },
    Skill { name: "EDA", note: None },
    Skill { name: "Feature Engineering", note: None },
    Skill { name: "Machine Learning", note: None },
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience">
            <h5>"What Skills I Have"</h5>
            <h2>"My Experience And Skills"</h2>

            <div class="container experience__container">
                <SkillColumn title="Experience" skills=CURRENT_SKILLS />
                <SkillColumn title="Learning Skills" skills=LEARNING_SKILLS />
            </div>
        </section>
    }
}

#[component]
fn SkillColumn(title: &'static str, skills: &'static [Skill]) -> impl IntoView {
    view! {
        <div class="experience__column">
            <h3>{title}</h3>
            <div class="experience__content">
                {skills.iter().map(|skill| view! {
                    <article class="experience__details">
                        <div>
                            <h4>{skill.name}</h4>
                            {skill.note.map(|n| view! {
                                <small class="text-light">{n}</small>
                            })}
                        </div>
                    </article>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
