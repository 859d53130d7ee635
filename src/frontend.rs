use wasm_bindgen::JsCast;
use web_sys::{
    window, HtmlElement, HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent,
};
use yew::prelude::*;

use crate::hooks::{
    scroll_to_section, scroll_to_top, use_back_to_top, use_reveal, use_typewriter, StepTimer,
};
use crate::reveal::stagger_style;

const HERO_TITLE: &str = "Hi, I'm Venkata Rao Gonugunta — DevOps & Cloud Engineer";
const TYPE_INTERVAL_MS: i32 = 50;
const FORM_STATUS_DISMISS_MS: i32 = 4000;

// About uses a deeper trigger than the list-like sections so its two-column
// layout is well inside the viewport before the entrance starts.
const ABOUT_THRESHOLD: f64 = 0.2;
const LIST_THRESHOLD: f64 = 0.1;

const RESUME_PATH: &str = "/assets/Venkata_Rao_Resume.pdf";
const RESUME_FILENAME: &str = "Venkata_Rao_Resume.pdf";
const GITHUB_URL: &str = "https://github.com";
const LINKEDIN_URL: &str = "https://linkedin.com";
const EMAIL: &str = "venkatraog0339@gmail.com";
const MAILTO_HREF: &str = "mailto:venkatraog0339@gmail.com";
const PHONE_DISPLAY: &str = "+1 (430) 295-0339";
const PHONE_HREF: &str = "tel:+14302950339";
const LOCATION: &str = "Commerce, TX";

struct Metric {
    value: &'static str,
    label: &'static str,
}

static METRICS: [Metric; 4] = [
    Metric {
        value: "7+",
        label: "Years Experience",
    },
    Metric {
        value: "20%",
        label: "Faster Releases",
    },
    Metric {
        value: "30%",
        label: "MTTR Reduction",
    },
    Metric {
        value: "AWS•Azure•GCP",
        label: "Multi-Cloud",
    },
];

struct Job {
    company: &'static str,
    role: &'static str,
    period: &'static str,
    location: &'static str,
    highlights: &'static [&'static str],
}

static JOBS: [Job; 3] = [
    Job {
        company: "GM Financials",
        role: "DevOps Cloud Engineer",
        period: "Jan 2024 – Present",
        location: "Commerce, TX",
        highlights: &[
            "Reduced Java microservice build/deploy times by ~20% using Jenkins with Gradle",
            "Migrated workloads to AWS EKS & Azure AKS, achieving ~20% cost savings via autoscaling",
            "Built modular Terraform modules for VPC, EKS, and networking with S3 + DynamoDB remote state",
            "Implemented ALB/Nginx Ingress with TLS and Route 53 custom domains",
            "Created Dynatrace dashboards and alerts, reducing MTTR by ~30%",
        ],
    },
    Job {
        company: "Technox Technologies",
        role: "DevOps Engineer",
        period: "Aug 2019 – Aug 2022",
        location: "Remote",
        highlights: &[
            "Deployed Prometheus, Grafana, and ELK stack for comprehensive monitoring",
            "Provisioned AWS infrastructure using Terraform with automated deployments",
            "Hardened IAM policies and conducted AWS Inspector security assessments",
            "Optimized AWS costs through rightsizing and reserved instances",
            "Automated OS patching and configuration management with Ansible",
        ],
    },
    Job {
        company: "NeoXam",
        role: "Linux Systems Administrator",
        period: "Feb 2017 – Jul 2019",
        location: "India",
        highlights: &[
            "Administered RHEL/CentOS servers and maintained high availability",
            "Automated system tasks with Bash and Python scripting",
            "Configured and optimized nginx and Apache reverse proxies",
            "Performed on-call operations support and incident management",
        ],
    },
];

#[derive(PartialEq)]
struct Project {
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
    description: &'static str,
    outcomes: &'static [&'static str],
    tech: &'static [&'static str],
    case_study: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        title: "CI/CD Pipeline Optimization",
        subtitle: "GM Financials - Enterprise Pipeline Automation",
        image: "/assets/projects/p1.jpg",
        description: "Architected and optimized enterprise CI/CD pipelines for Java microservices, achieving significant improvements in build and deployment efficiency.",
        outcomes: &[
            "Reduced build/deployment times by 20% using Jenkins with Gradle optimization",
            "Standardized Git branching strategies and automated webhooks",
            "Implemented multi-stage pipeline with automated testing and quality gates",
            "Containerized services with Docker and orchestrated deployments on Kubernetes",
        ],
        tech: &["Jenkins", "GitHub Actions", "Gradle", "Docker", "Kubernetes", "SonarQube"],
        case_study: "This project involved modernizing legacy deployment processes for a financial services platform. By implementing GitOps principles and infrastructure as code, we established a reliable, repeatable deployment pipeline that reduced manual intervention and improved release frequency.",
    },
    Project {
        title: "Kubernetes Cloud Migration",
        subtitle: "Multi-Cloud EKS/AKS Implementation",
        image: "/assets/projects/p2.jpg",
        description: "Led the migration of containerized workloads to managed Kubernetes services across AWS and Azure, implementing best practices for scalability and cost optimization.",
        outcomes: &[
            "Migrated 50+ microservices to AWS EKS and Azure AKS",
            "Achieved 20% infrastructure cost savings through autoscaling and resource optimization",
            "Implemented Ingress controllers (ALB/Nginx) with TLS termination",
            "Configured custom domains with Route 53 and Azure DNS",
        ],
        tech: &["AWS EKS", "Azure AKS", "Terraform", "Helm", "Istio", "ArgoCD"],
        case_study: "The migration strategy involved careful capacity planning, gradual rollout with blue-green deployments, and comprehensive monitoring setup. We established GitOps workflows with ArgoCD for declarative configuration management and implemented service mesh for enhanced observability.",
    },
    Project {
        title: "Infrastructure as Code Modules",
        subtitle: "Terraform Cloud Architecture",
        image: "/assets/projects/p3.jpg",
        description: "Designed and implemented reusable Terraform modules for AWS infrastructure, enabling consistent and secure cloud resource provisioning across multiple environments.",
        outcomes: &[
            "Created modular Terraform code for VPC, subnets, security groups, and EKS clusters",
            "Implemented remote state management with S3 and DynamoDB locking",
            "Enabled safe team collaboration through Terraform workspaces",
            "Automated infrastructure provisioning with Python (Boto3) integration",
        ],
        tech: &["Terraform", "AWS", "Python", "Boto3", "CloudFormation", "Ansible"],
        case_study: "This initiative standardized infrastructure deployment across development, staging, and production environments. The modular approach reduced provisioning time from days to hours and eliminated configuration drift through version-controlled infrastructure definitions.",
    },
];

struct Certification {
    name: &'static str,
    issuer: &'static str,
    level: &'static str,
    image: &'static str,
    description: &'static str,
    verify_url: &'static str,
}

static CERTIFICATIONS: [Certification; 2] = [
    Certification {
        name: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        level: "Associate",
        image: "/assets/certs/aws-saa.png",
        description: "Validates expertise in designing distributed systems on AWS with best practices for security, reliability, and cost optimization.",
        verify_url: "#",
    },
    Certification {
        name: "Certified Kubernetes Administrator",
        issuer: "Cloud Native Computing Foundation",
        level: "CKA",
        image: "/assets/certs/cka.png",
        description: "Demonstrates proficiency in Kubernetes cluster administration, including installation, configuration, and troubleshooting.",
        verify_url: "#",
    },
];

static SKILLS: [&str; 17] = [
    "AWS",
    "Azure",
    "GCP",
    "Kubernetes",
    "Docker",
    "Terraform",
    "Jenkins",
    "GitHub Actions",
    "GitLab CI",
    "ArgoCD",
    "Ansible",
    "Prometheus",
    "Grafana",
    "ELK Stack",
    "Python",
    "Bash",
    "CloudFormation",
];

fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

fn download_resume() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(anchor) = document.create_element("a") else {
        return;
    };

    let _ = anchor.set_attribute("href", RESUME_PATH);
    let _ = anchor.set_attribute("download", RESUME_FILENAME);
    if body.append_child(&anchor).is_ok() {
        if let Some(anchor) = anchor.dyn_ref::<HtmlElement>() {
            anchor.click();
        }
        let _ = body.remove_child(&anchor);
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let (title, typing_done) = use_typewriter(HERO_TITLE, TYPE_INTERVAL_MS);

    let on_view_resume = Callback::from(|_: MouseEvent| open_in_new_tab(RESUME_PATH));
    let on_download_resume = Callback::from(|_: MouseEvent| download_resume());
    let on_scroll_down = Callback::from(|_: MouseEvent| scroll_to_section("about"));

    html! {
        <section id="home" class="hero">
            <div class="hero-inner enter-up">
                <h1 class="hero-title">
                    <span>{title}</span>
                    { (!typing_done).then(|| html! {
                        <span class="typing-caret" aria-hidden="true" />
                    }) }
                </h1>
                <p class="hero-subtitle">
                    {"I design, automate, and secure multi-cloud infrastructures using AWS, Azure, Kubernetes, and Terraform."}
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary" type="button" onclick={on_view_resume}>
                        {"View Resume"}
                    </button>
                    <button class="btn btn-outline" type="button" onclick={on_download_resume}>
                        {"Download Resume"}
                    </button>
                </div>
                <div class="hero-social">
                    <a class="social-link" href={GITHUB_URL} target="_blank" rel="noopener noreferrer">
                        {"GitHub"}
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    </a>
                    <a class="social-link" href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">
                        {"LinkedIn"}
                        <span class="external-mark" aria-hidden="true">{"↗"}</span>
                    </a>
                    <a class="social-link" href={MAILTO_HREF}>{"Email"}</a>
                </div>
            </div>
            <button
                class="scroll-indicator"
                type="button"
                onclick={on_scroll_down}
                aria-label="Scroll to about section"
            >
                {"⌄"}
            </button>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let (section_ref, revealed) = use_reveal(ABOUT_THRESHOLD);

    html! {
        <section id="about" ref={section_ref} class="section section-alt">
            <div class="section-inner about-grid">
                <div class={classes!("about-copy", "reveal-up", revealed.then_some("is-revealed"))}>
                    <h2 class="section-heading">{"About "}<span class="accent">{"Me"}</span></h2>
                    <p>
                        {"I'm a DevOps Engineer with "}<strong>{"7+ years of experience"}</strong>
                        {" in multi-cloud platforms, CI/CD automation, Linux administration, and DevSecOps. \
                          I specialize in building secure, scalable systems with AWS, Azure, Kubernetes, \
                          Terraform, Jenkins, and modern observability stacks."}
                    </p>
                    <p>
                        {"My expertise lies in "}<strong>{"EKS/AKS migrations"}</strong>
                        {", modular Infrastructure as Code with Terraform, advanced Jenkins/GitHub Actions \
                          pipelines, and comprehensive monitoring with Prometheus, Grafana, and ELK. I've \
                          successfully reduced deployment times by 20% and Mean Time To Recovery by 30% \
                          through automation and DevOps best practices."}
                    </p>
                    <p>
                        {"I thrive in building "}<strong>{"reliable, scalable systems"}</strong>
                        {" while ensuring security compliance, cost optimization, and team collaboration. \
                          From incident response to mentoring teams on DevOps workflows, I bring a holistic \
                          approach to infrastructure and operations."}
                    </p>
                    <div class="metric-grid">
                        { METRICS.iter().enumerate().map(|(index, metric)| html! {
                            <div
                                class={classes!("metric-tile", "reveal-fade", revealed.then_some("is-revealed"))}
                                style={revealed.then(|| stagger_style(index, 100, 0))}
                            >
                                <div class="metric-value">{metric.value}</div>
                                <div class="metric-label">{metric.label}</div>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
                <div class={classes!("about-photo", "reveal-scale", revealed.then_some("is-revealed"))}>
                    <img
                        src="/assets/profile.jpg"
                        alt="Venkata Rao Gonugunta - DevOps Engineer"
                        loading="lazy"
                    />
                </div>
            </div>
            <blockquote
                class={classes!("about-quote", "reveal-fade", revealed.then_some("is-revealed"))}
                style={revealed.then(|| stagger_style(METRICS.len(), 100, 0))}
            >
                {"\"DevOps isn't just a job — it's how I think and build scalable systems.\""}
            </blockquote>
        </section>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    let (section_ref, revealed) = use_reveal(LIST_THRESHOLD);

    html! {
        <section id="experience" ref={section_ref} class="section">
            <div class="section-inner">
                <h2 class={classes!("section-heading", "centered", "reveal-up", revealed.then_some("is-revealed"))}>
                    {"Professional "}<span class="accent">{"Experience"}</span>
                </h2>
                <div class="timeline">
                    { JOBS.iter().enumerate().map(|(index, job)| html! {
                        <article
                            class={classes!("timeline-entry", "reveal-fade", revealed.then_some("is-revealed"))}
                            style={revealed.then(|| stagger_style(index, 200, 0))}
                        >
                            <span class="timeline-node" aria-hidden="true" />
                            <div class="job-card">
                                <div class="job-head">
                                    <div>
                                        <h3>{job.company}</h3>
                                        <p class="job-role">{job.role}</p>
                                    </div>
                                    <div class="job-meta">
                                        <p>{job.period}</p>
                                        <p>{job.location}</p>
                                    </div>
                                </div>
                                <ul class="job-highlights">
                                    { job.highlights.iter().map(|highlight| html! {
                                        <li>
                                            <span class="bullet" aria-hidden="true">{"▹"}</span>
                                            {*highlight}
                                        </li>
                                    }).collect::<Html>() }
                                </ul>
                            </div>
                        </article>
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
    revealed: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let details_open = use_state(|| false);

    let open_details = {
        let details_open = details_open.clone();
        Callback::from(move |_: MouseEvent| details_open.set(true))
    };
    let close_details = {
        let details_open = details_open.clone();
        Callback::from(move |_: MouseEvent| details_open.set(false))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    let project = props.project;

    html! {
        <>
            <article
                class={classes!("project-card", "reveal-scale", props.revealed.then_some("is-revealed"))}
                style={props.revealed.then(|| stagger_style(props.index, 150, 0))}
            >
                <div class="project-media">
                    <img src={project.image} alt={project.title} loading="lazy" />
                </div>
                <div class="project-body">
                    <h3>{project.title}</h3>
                    <p class="project-subtitle">{project.subtitle}</p>
                    <p class="project-description">{project.description}</p>
                    <div class="pill-row">
                        { project.tech.iter().take(4).map(|tech| html! {
                            <span class="pill">{*tech}</span>
                        }).collect::<Html>() }
                    </div>
                    <button class="btn btn-outline full-width" type="button" onclick={open_details}>
                        {"View Details"}
                    </button>
                </div>
            </article>
            { (*details_open).then(|| html! {
                <div class="modal-overlay" onclick={close_details.clone()}>
                    <div class="modal" role="dialog" aria-label={project.title} onclick={keep_open.clone()}>
                        <button
                            class="modal-close"
                            type="button"
                            onclick={close_details.clone()}
                            aria-label="Close details"
                        >
                            {"✕"}
                        </button>
                        <h3>{project.title}</h3>
                        <p class="project-subtitle">{project.subtitle}</p>
                        <img src={project.image} alt={project.title} loading="lazy" />
                        <h4>{"Overview"}</h4>
                        <p>{project.description}</p>
                        <h4>{"Key Outcomes"}</h4>
                        <ul class="outcome-list">
                            { project.outcomes.iter().map(|outcome| html! {
                                <li>
                                    <span class="bullet" aria-hidden="true">{"✓"}</span>
                                    {*outcome}
                                </li>
                            }).collect::<Html>() }
                        </ul>
                        <h4>{"Case Study"}</h4>
                        <p>{project.case_study}</p>
                        <h4>{"Technologies Used"}</h4>
                        <div class="pill-row">
                            { project.tech.iter().map(|tech| html! {
                                <span class="pill">{*tech}</span>
                            }).collect::<Html>() }
                        </div>
                    </div>
                </div>
            }) }
        </>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let (section_ref, revealed) = use_reveal(LIST_THRESHOLD);

    html! {
        <section id="projects" ref={section_ref} class="section section-alt">
            <div class="section-inner">
                <h2 class={classes!("section-heading", "centered", "reveal-up", revealed.then_some("is-revealed"))}>
                    {"Featured "}<span class="accent">{"Projects"}</span>
                </h2>
                <div class="project-grid">
                    { PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard {project} {index} {revealed} />
                    }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}

#[function_component(Certifications)]
fn certifications() -> Html {
    let (section_ref, revealed) = use_reveal(LIST_THRESHOLD);

    html! {
        <section id="certifications" ref={section_ref} class="section">
            <div class="section-inner">
                <h2 class={classes!("section-heading", "centered", "reveal-up", revealed.then_some("is-revealed"))}>
                    {"Professional "}<span class="accent">{"Certifications"}</span>
                </h2>
                <div class="cert-grid">
                    { CERTIFICATIONS.iter().enumerate().map(|(index, cert)| {
                        let verify_url = cert.verify_url;
                        let on_verify = Callback::from(move |_: MouseEvent| open_in_new_tab(verify_url));
                        html! {
                            <article
                                class={classes!("cert-card", "reveal-scale", revealed.then_some("is-revealed"))}
                                style={revealed.then(|| stagger_style(index, 150, 0))}
                            >
                                <span class="cert-ribbon">{"Verified"}</span>
                                <div class="cert-logo">
                                    <img src={cert.image} alt={cert.name} loading="lazy" />
                                </div>
                                <h3>{cert.name}</h3>
                                <p class="cert-level">{cert.level}</p>
                                <p class="cert-issuer">{cert.issuer}</p>
                                <p class="cert-description">{cert.description}</p>
                                <button class="btn btn-outline" type="button" onclick={on_verify}>
                                    {"Verify Credential"}
                                    <span class="external-mark" aria-hidden="true">{"↗"}</span>
                                </button>
                            </article>
                        }
                    }).collect::<Html>() }
                </div>
                <div
                    class={classes!("skills", "reveal-fade", revealed.then_some("is-revealed"))}
                    style={revealed.then(|| stagger_style(CERTIFICATIONS.len(), 200, 0))}
                >
                    <h3>{"Core Competencies"}</h3>
                    <div class="pill-row centered">
                        { SKILLS.iter().map(|skill| html! {
                            <span class="pill pill-lg">{*skill}</span>
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum FormStatus {
    MissingFields,
    Sent,
}

impl FormStatus {
    fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Please fill in all fields",
            Self::Sent => "Message sent! I'll get back to you soon.",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::MissingFields => "is-error",
            Self::Sent => "is-success",
        }
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| None::<FormStatus>);

    // The acknowledgment is local-only; it lingers briefly, then clears.
    {
        let status = status.clone();
        use_effect_with(*status, move |current: &Option<FormStatus>| {
            let pending = if current.is_some() {
                StepTimer::schedule(FORM_STATUS_DISMISS_MS, move || status.set(None))
            } else {
                None
            };
            move || drop(pending)
        });
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            let field: HtmlInputElement = event.target_unchecked_into();
            name.set(field.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let field: HtmlInputElement = event.target_unchecked_into();
            email.set(field.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            let field: HtmlTextAreaElement = event.target_unchecked_into();
            message.set(field.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
                status.set(Some(FormStatus::MissingFields));
                return;
            }

            status.set(Some(FormStatus::Sent));
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        })
    };

    let on_view_resume = Callback::from(|_: MouseEvent| open_in_new_tab(RESUME_PATH));

    html! {
        <section id="contact" class="section section-alt">
            <div class="section-inner">
                <h2 class="section-heading centered enter-up">
                    {"Get In "}<span class="accent">{"Touch"}</span>
                </h2>
                <div class="contact-grid">
                    <form class="contact-form enter-fade" {onsubmit}>
                        <div class="field">
                            <label for="name">{"Name"}</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                placeholder="Your name"
                                value={(*name).clone()}
                                oninput={on_name}
                                required={true}
                            />
                        </div>
                        <div class="field">
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                placeholder="your.email@example.com"
                                value={(*email).clone()}
                                oninput={on_email}
                                required={true}
                            />
                        </div>
                        <div class="field">
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="6"
                                placeholder="Tell me about your project or opportunity..."
                                value={(*message).clone()}
                                oninput={on_message}
                                required={true}
                            />
                        </div>
                        <button class="btn btn-primary full-width" type="submit">{"Send Message"}</button>
                        { (*status).map(|status| html! {
                            <p class={classes!("form-status", status.class())} role="status">
                                {status.message()}
                            </p>
                        }) }
                    </form>
                    <div class="contact-info enter-fade" style="animation-delay: 200ms;">
                        <div class="info-card">
                            <h3>{"Contact Information"}</h3>
                            <ul class="info-list">
                                <li>
                                    <span class="info-label">{"Email"}</span>
                                    <a href={MAILTO_HREF}>{EMAIL}</a>
                                </li>
                                <li>
                                    <span class="info-label">{"Phone"}</span>
                                    <a href={PHONE_HREF}>{PHONE_DISPLAY}</a>
                                </li>
                                <li>
                                    <span class="info-label">{"Location"}</span>
                                    <span>{LOCATION}</span>
                                </li>
                            </ul>
                        </div>
                        <div class="info-card">
                            <h3>{"Connect With Me"}</h3>
                            <div class="connect-row">
                                <a
                                    class="btn btn-outline"
                                    href={GITHUB_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"GitHub"}
                                </a>
                                <a
                                    class="btn btn-outline"
                                    href={LINKEDIN_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"LinkedIn"}
                                </a>
                            </div>
                            <button class="btn btn-outline full-width" type="button" onclick={on_view_resume}>
                                {"View Resume"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let show_back_to_top = use_back_to_top();
    let on_back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <>
            { show_back_to_top.then(|| html! {
                <button
                    class="back-to-top enter-scale"
                    type="button"
                    onclick={on_back_to_top.clone()}
                    aria-label="Back to top"
                >
                    {"↑"}
                </button>
            }) }
            <footer class="site-footer">
                <div class="footer-inner">
                    <p class="footer-copy">
                        {format!("© {year} Venkata Rao Gonugunta. All rights reserved.")}
                    </p>
                    <div class="footer-links">
                        <button class="footer-link" type="button" onclick={on_back_to_top}>
                            {"Back to Top"}
                        </button>
                        <a class="footer-link" href={RESUME_PATH} target="_blank" rel="noopener noreferrer">
                            {"Resume"}
                        </a>
                        <a class="footer-link" href={MAILTO_HREF}>{"Email"}</a>
                    </div>
                </div>
            </footer>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <main id="content">
                <Hero />
                <About />
                <Experience />
                <Projects />
                <Certifications />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
