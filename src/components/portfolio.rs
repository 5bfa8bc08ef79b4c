use leptos::prelude::*;

struct PortfolioItem {
    image: &'static str,
    title: &'static str,
    repo: &'static str,
}

const ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        image: "assets/port-1.png",
        title: "Header of Portfolio",
        repo: "https://github.com/MoAkeebKhan/portfolio",
    },
    PortfolioItem {
        image: "assets/port-2.png",
        title: "Animated Image Slides",
        repo: "https://github.com/MoAkeebKhan/portfolio",
    },
    PortfolioItem {
        image: "assets/port-3.png",
        title: "Experience Blog",
        repo: "https://github.com/MoAkeebKhan/portfolio",
    },
    PortfolioItem {
        image: "assets/port-4.png",
        title: "Skills Blog",
        repo: "https://github.com/MoAkeebKhan/portfolio",
    },
    PortfolioItem {
        image: "assets/port-5.png",
        title: "HTML Script",
        repo: "https://github.com/MoAkeebKhan/portfolio",
    },
    PortfolioItem {
        image: "assets/port-6.png",
        title: "CSS Code",
        repo: "https://github.com/MoAkeebKhan/portfolio",
    },
];

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio">
            <h5>"My React Work"</h5>
            <h2>"Portfolio"</h2>

            <div class="container portfolio__container">
                {ITEMS.iter().map(|item| view! {
                    <article class="portfolio__item">
                        <div class="portfolio__item-image">
                            <img src=item.image alt=item.title />
                        </div>
                        <h3>{item.title}</h3>
                        <div class="portfolio__item-cta">
                            <a href=item.repo class="btn" target="_blank">"GitHub"</a>
                        </div>
                    </article>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
