//! Built-in template catalog.
//!
//! Layout tokens are utility-class strings consumed by the preview client;
//! the render engine passes them through without interpreting them.

use super::{
    HeaderLayout, PreviewEducation, PreviewExperience, SectionLabels, SectionsLayout,
    SkillsLayout, StyleOverrides, Template, TemplateLayout, TemplatePreview,
};

pub static TEMPLATES: [Template; 3] = [PROFESSIONAL, MODERN, MINIMAL];

const PROFESSIONAL: Template = Template {
    id: "professional",
    name: "Professional",
    layout: TemplateLayout {
        header: HeaderLayout {
            style: "mb-6",
            name_style: "text-2xl font-bold mb-1",
            contact_style: "text-sm text-gray-600",
        },
        sections: SectionsLayout {
            style: "mb-6",
            title_style: "text-lg font-bold mb-2",
            content_style: "space-y-3",
        },
        skills: SkillsLayout {
            style: "flex flex-wrap gap-2",
            item_style: "px-2 py-1 bg-gray-100 text-sm text-gray-700",
        },
    },
    overrides: StyleOverrides {
        invert_header: false,
        contact_opacity: None,
        uppercase_labels: false,
        tint_skills: true,
        labels: SectionLabels {
            summary: "Summary",
            experience: "Work Experience",
            education: "Education",
            skills: "Skills",
        },
    },
    preview: TemplatePreview {
        name: "Alex Thompson",
        contact: "alex@email.com | (555) 123-4567 | New York, NY",
        summary: None,
        experience: &[PreviewExperience {
            title: "Senior Software Engineer",
            company: "Tech Solutions Inc.",
            duration: "2020 - Present",
            description: "Led development of enterprise applications and mentored junior developers.",
        }],
        education: &[PreviewEducation {
            degree: "Bachelor of Science in Computer Science",
            school: "University of Technology",
            year: "2016 - 2020",
        }],
        skills: &["JavaScript", "React", "Node.js", "Python", "AWS"],
    },
};

const MODERN: Template = Template {
    id: "modern",
    name: "Modern",
    layout: TemplateLayout {
        header: HeaderLayout {
            style: "bg-gray-900 text-white p-6 text-center mb-6",
            name_style: "text-3xl font-bold mb-2",
            contact_style: "text-sm text-gray-300",
        },
        sections: SectionsLayout {
            style: "mb-6 px-6",
            title_style: "text-lg font-bold mb-2",
            content_style: "space-y-3",
        },
        skills: SkillsLayout {
            style: "flex flex-wrap gap-2",
            item_style: "px-3 py-1 bg-gray-900 text-white text-sm rounded",
        },
    },
    overrides: StyleOverrides {
        invert_header: true,
        contact_opacity: Some(0.8),
        uppercase_labels: false,
        tint_skills: true,
        labels: SectionLabels {
            summary: "About",
            experience: "Experience",
            education: "Education",
            skills: "Skills",
        },
    },
    preview: TemplatePreview {
        name: "Sarah Chen",
        contact: "sarah@email.com | (555) 987-6543 | San Francisco, CA",
        summary: None,
        experience: &[PreviewExperience {
            title: "Product Designer",
            company: "Design Studio Co.",
            duration: "2019 - Present",
            description: "Created user-centered designs for various digital products.",
        }],
        education: &[PreviewEducation {
            degree: "Master of Fine Arts in Design",
            school: "Design Institute",
            year: "2017 - 2019",
        }],
        skills: &["UI/UX", "Figma", "Adobe CC", "Prototyping", "Design Systems"],
    },
};

const MINIMAL: Template = Template {
    id: "minimal",
    name: "Minimal",
    layout: TemplateLayout {
        header: HeaderLayout {
            style: "mb-8",
            name_style: "text-3xl font-light mb-1",
            contact_style: "text-sm text-gray-600",
        },
        sections: SectionsLayout {
            style: "mb-6",
            title_style: "text-sm font-medium uppercase tracking-wide mb-3",
            content_style: "space-y-3",
        },
        skills: SkillsLayout {
            style: "flex flex-wrap gap-x-4",
            item_style: "text-sm text-gray-600",
        },
    },
    overrides: StyleOverrides {
        invert_header: false,
        contact_opacity: None,
        uppercase_labels: true,
        tint_skills: false,
        labels: SectionLabels {
            summary: "Summary",
            experience: "Experience",
            education: "Education",
            skills: "Skills",
        },
    },
    preview: TemplatePreview {
        name: "Michael Park",
        contact: "michael@email.com | (555) 234-5678 | London, UK",
        summary: None,
        experience: &[PreviewExperience {
            title: "Marketing Manager",
            company: "Global Brands Ltd.",
            duration: "2018 - Present",
            description: "Developed and executed marketing strategies for international markets.",
        }],
        education: &[PreviewEducation {
            degree: "MBA in Marketing",
            school: "Business School",
            year: "2016 - 2018",
        }],
        skills: &[
            "Digital Marketing",
            "Brand Strategy",
            "Analytics",
            "Social Media",
            "Content Strategy",
        ],
    },
};
