use gtk4::prelude::*;
use gtk4 as gtk;
use portfolio::content::{OWNER, Section};

pub struct Sidebar {
    root: gtk::Box,
    list: gtk::ListBox,
}

impl Sidebar {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.set_margin_top(8);
        root.set_margin_bottom(8);
        root.set_margin_start(8);
        root.set_margin_end(8);

        let title = gtk::Label::new(Some(OWNER));
        title.add_css_class("heading");
        title.set_halign(gtk::Align::Start);
        root.append(&title);

        let list = gtk::ListBox::new();
        list.add_css_class("navigation-sidebar");
        root.append(&list);

        Self { root, list }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_items(&self, items: &[Section]) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }
        for section in items {
            let row = gtk::ListBoxRow::new();
            // The row name carries the section id back out of the selection signal.
            row.set_widget_name(section.id());
            let label = gtk::Label::new(Some(section.title()));
            label.set_margin_top(8);
            label.set_margin_bottom(8);
            label.set_margin_start(8);
            label.set_margin_end(8);
            label.set_halign(gtk::Align::Start);
            row.set_child(Some(&label));
            self.list.append(&row);
        }
    }

    pub fn connect_section_selected<F: Fn(Section) + 'static>(&self, f: F) {
        self.list.connect_row_selected(move |_, row| {
            if let Some(section) = row.and_then(|r| Section::from_id(r.widget_name().as_str())) {
                f(section);
            }
        });
    }

    pub fn select(&self, section: Section) {
        let mut idx = 0;
        while let Some(row) = self.list.row_at_index(idx) {
            if row.widget_name().as_str() == section.id() {
                self.list.select_row(Some(&row));
                return;
            }
            idx += 1;
        }
    }
}
