use gtk4::prelude::*;
use gtk4 as gtk;
use log::warn;
use portfolio::contact::{ContactForm, Field, SubmissionStatus};
use portfolio::content::{CONTACT_BLURB, Section};
use std::rc::Rc;

pub struct ContactView;

impl ContactView {
    pub fn new(form: ContactForm) -> gtk::Widget {
        let (scroller, root) = crate::ui::sections::page(Section::Contact.title(), Some(CONTACT_BLURB));

        let email_label = gtk::Label::new(Some("Email"));
        email_label.set_halign(gtk::Align::Start);
        let email_entry = gtk::Entry::new();
        email_entry.set_widget_name("email");
        email_entry.set_placeholder_text(Some("Your email"));
        email_entry.set_input_purpose(gtk::InputPurpose::Email);
        email_entry.set_hexpand(true);

        let message_label = gtk::Label::new(Some("Message"));
        message_label.set_halign(gtk::Align::Start);
        let message_view = gtk::TextView::new();
        message_view.set_widget_name("message");
        message_view.set_wrap_mode(gtk::WrapMode::WordChar);
        let message_scroller = gtk::ScrolledWindow::builder()
            .min_content_height(120)
            .hexpand(true)
            .child(&message_view)
            .build();
        message_scroller.add_css_class("card");

        let form_box = gtk::Box::new(gtk::Orientation::Vertical, 8);
        form_box.append(&email_label);
        form_box.append(&email_entry);
        form_box.append(&message_label);
        form_box.append(&message_scroller);
        root.append(&form_box);

        let status = gtk::Label::new(None);
        status.set_halign(gtk::Align::Start);
        status.set_visible(false);
        root.append(&status);

        let send_btn = gtk::Button::with_label(SubmissionStatus::Idle.submit_label());
        send_btn.add_css_class("suggested-action");
        send_btn.set_halign(gtk::Align::End);
        root.append(&send_btn);

        // Widget names double as field ids.
        let on_field_changed: Rc<dyn Fn(&str, String)> = {
            let form = form.clone();
            Rc::new(move |id: &str, value: String| match id.parse::<Field>() {
                Ok(field) => form.update_field(field, value),
                Err(e) => warn!("{e}"),
            })
        };
        {
            let on_field_changed = on_field_changed.clone();
            email_entry.connect_changed(move |entry| {
                (on_field_changed)(entry.widget_name().as_str(), entry.text().to_string())
            });
        }
        {
            let name = message_view.widget_name();
            message_view.buffer().connect_changed(move |buf| {
                let (start, end) = buf.bounds();
                (on_field_changed)(name.as_str(), buf.text(&start, &end, false).to_string())
            });
        }

        let on_submit: Rc<dyn Fn()> = {
            let form = form.clone();
            Rc::new(move || {
                if !form.can_submit() {
                    return;
                }
                let form = form.clone();
                crate::utils::spawn_async(async move {
                    form.submit().await;
                });
            })
        };
        {
            let on_submit = on_submit.clone();
            send_btn.connect_clicked(move |_| (on_submit)());
        }
        email_entry.connect_activate(move |_| (on_submit)());

        let rx = crate::utils::watch_to_main(form.subscribe());
        rx.attach(None, move |current| {
            send_btn.set_sensitive(!current.is_submitting());
            send_btn.set_label(current.submit_label());

            status.remove_css_class("success");
            status.remove_css_class("error");
            match current.message() {
                Some(text) => {
                    status.set_label(text);
                    status.set_visible(true);
                }
                None => status.set_visible(false),
            }
            match current {
                SubmissionStatus::Succeeded(_) => {
                    status.add_css_class("success");
                    email_entry.set_text("");
                    message_view.buffer().set_text("");
                }
                SubmissionStatus::Failed(_) => status.add_css_class("error"),
                SubmissionStatus::Idle | SubmissionStatus::Submitting => {}
            }
            glib::ControlFlow::Continue
        });

        scroller.upcast()
    }
}
