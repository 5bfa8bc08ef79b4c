use leptos::prelude::*;

struct Certification {
    title: &'static str,
    points: &'static [&'static str],
}

const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Microsoft Certified in Python",
        points: &[
            "Fundamental understanding of the Python programming language.",
            "Skills to confidently apply for Python programming jobs.",
            "Creating standalone Python programs.",
            "Taught by experienced professional software developers.",
            "Covers both Python 2 and Python 3.",
        ],
    },
    Certification {
        title: "Certification in Data Science with Machine Learning Workshop",
        points: &[
            "Exploratory Data Analysis.",
            "Descriptive Statistics.",
            "Model building and fine tuning.",
            "Supervised and unsupervised learning.",
            "Natural Language Processing.",
        ],
    },
    Certification {
        title: "Certification in AI Classroom Series",
        points: &[
            "Logical approach to AI and knowledge-based systems.",
            "Probabilistic approach to AI.",
            "Neural networks and natural language understanding.",
            "Introduction to Machine Learning.",
            "Learning deterministic models.",
        ],
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services">
            <h5>"Strive not to be a success, but rather to be of value."</h5>
            <h2>"Certifications"</h2>

            <div class="container services__container">
                {CERTIFICATIONS.iter().map(|cert| view! {
                    <article class="service">
                        <div class="service__head">
                            <h3>{cert.title}</h3>
                        </div>
                        <ul class="service__list">
                            {cert.points.iter().map(|point| view! {
                                <li><p>{*point}</p></li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </article>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
