use gtk4::prelude::*;
use gtk4 as gtk;
use portfolio::content::{
    FIRST_NAME, GITHUB_PROFILE, PROJECTS, PROJECTS_BLURB, Project, SKILLS, SOCIAL_LINKS, Section,
    TAGLINE,
};
use std::rc::Rc;

/// Scrollable page with a heading; content goes into the returned box.
pub fn page(title: &str, blurb: Option<&str>) -> (gtk::ScrolledWindow, gtk::Box) {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
    root.set_margin_top(24);
    root.set_margin_bottom(24);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let heading = gtk::Label::new(Some(title));
    heading.add_css_class("title-1");
    heading.set_halign(gtk::Align::Start);
    root.append(&heading);

    if let Some(text) = blurb {
        let lbl = gtk::Label::new(Some(text));
        lbl.add_css_class("dim-label");
        lbl.set_wrap(true);
        lbl.set_xalign(0.0);
        root.append(&lbl);
    }

    let scroller = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .hexpand(true)
        .build();
    scroller.set_child(Some(&root));
    (scroller, root)
}

pub fn home_page(navigate: Rc<dyn Fn(Section)>) -> gtk::Widget {
    let (scroller, root) = page(&format!("Hi, I'm {FIRST_NAME}"), None);

    for line in TAGLINE {
        let lbl = gtk::Label::new(Some(line));
        lbl.set_wrap(true);
        lbl.set_xalign(0.0);
        root.append(&lbl);
    }

    let actions = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    let contact_btn = gtk::Button::with_label("Contact Me");
    contact_btn.add_css_class("suggested-action");
    let projects_btn = gtk::Button::with_label("View Projects");
    {
        let navigate = navigate.clone();
        contact_btn.connect_clicked(move |_| navigate(Section::Contact));
    }
    projects_btn.connect_clicked(move |_| navigate(Section::Projects));
    actions.append(&contact_btn);
    actions.append(&projects_btn);
    root.append(&actions);

    let links = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    for link in SOCIAL_LINKS {
        links.append(&gtk::LinkButton::with_label(link.href, link.label));
    }
    root.append(&links);

    scroller.upcast()
}

pub fn skills_page() -> gtk::Widget {
    let (scroller, root) = page(Section::Skills.title(), None);

    let flow = gtk::FlowBox::new();
    flow.set_selection_mode(gtk::SelectionMode::None);
    flow.set_max_children_per_line(4);
    flow.set_homogeneous(true);
    for skill in SKILLS {
        let lbl = gtk::Label::new(Some(skill));
        lbl.add_css_class("card");
        lbl.set_margin_top(6);
        lbl.set_margin_bottom(6);
        flow.insert(&lbl, -1);
    }
    root.append(&flow);

    scroller.upcast()
}

fn project_card(project: &Project) -> gtk::Widget {
    let body = gtk::Box::new(gtk::Orientation::Vertical, 6);
    body.set_margin_top(12);
    body.set_margin_bottom(12);
    body.set_margin_start(12);
    body.set_margin_end(12);

    let title = gtk::Label::new(Some(project.title));
    title.add_css_class("heading");
    title.set_halign(gtk::Align::Start);
    body.append(&title);

    let desc = gtk::Label::new(Some(project.description));
    desc.set_wrap(true);
    desc.set_xalign(0.0);
    body.append(&desc);

    let link = gtk::LinkButton::with_label(project.link, "View on GitHub");
    link.set_halign(gtk::Align::Start);
    body.append(&link);

    let frame = gtk::Frame::new(None);
    frame.set_child(Some(&body));
    frame.upcast()
}

pub fn projects_page() -> gtk::Widget {
    let (scroller, root) = page(Section::Projects.title(), Some(PROJECTS_BLURB));

    for project in &PROJECTS {
        root.append(&project_card(project));
    }

    let more = gtk::LinkButton::with_label(GITHUB_PROFILE, "See more on GitHub");
    more.set_halign(gtk::Align::Center);
    root.append(&more);

    scroller.upcast()
}
