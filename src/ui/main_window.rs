use adw::prelude::*;
use adw::Application;
use portfolio::contact::ContactForm;
use portfolio::content::{OWNER, Section};
use std::rc::Rc;

pub fn show_main_window(app: &Application, form: Option<ContactForm>) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title(OWNER)
        .default_width(960)
        .default_height(640)
        .build();

    let overlay = adw::ToastOverlay::new();

    let split = adw::Flap::builder()
        .reveal_flap(true)
        .locked(true)
        .modal(false)
        .build();

    let sidebar = Rc::new(crate::ui::sidebar::Sidebar::new());
    let mut items = vec![Section::Home];
    items.extend(Section::NAV);
    sidebar.set_items(&items);
    split.set_flap(Some(&sidebar.widget()));

    let pages = gtk4::Stack::new();
    pages.set_transition_type(gtk4::StackTransitionType::Crossfade);

    let navigate: Rc<dyn Fn(Section)> = {
        let sidebar = sidebar.clone();
        Rc::new(move |section: Section| sidebar.select(section))
    };
    pages.add_named(&crate::ui::sections::home_page(navigate), Some(Section::Home.id()));
    pages.add_named(&crate::ui::sections::skills_page(), Some(Section::Skills.id()));
    pages.add_named(&crate::ui::sections::projects_page(), Some(Section::Projects.id()));

    let contact = match form {
        Some(form) => crate::ui::contact_view::ContactView::new(form),
        None => {
            overlay.add_toast(adw::Toast::new("Contact form is unavailable."));
            let (scroller, root) = crate::ui::sections::page(Section::Contact.title(), None);
            let lbl = gtk4::Label::new(Some("Messages can't be sent right now."));
            lbl.add_css_class("dim-label");
            lbl.set_halign(gtk4::Align::Start);
            root.append(&lbl);
            scroller.upcast()
        }
    };
    pages.add_named(&contact, Some(Section::Contact.id()));

    split.set_content(Some(&pages));
    overlay.set_child(Some(&split));

    {
        let pages = pages.clone();
        sidebar.connect_section_selected(move |section| pages.set_visible_child_name(section.id()));
    }
    sidebar.select(Section::Home);

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some(OWNER));
    header.set_title_widget(Some(&title));

    let menu_btn = gtk4::ToggleButton::builder()
        .icon_name("sidebar-show-symbolic")
        .active(true)
        .build();
    {
        let split = split.clone();
        menu_btn.connect_toggled(move |btn| split.set_reveal_flap(btn.is_active()));
    }
    header.pack_start(&menu_btn);
    container.append(&header);
    container.append(&overlay);
    window.set_content(Some(&container));
    window.present();
}
