use crate::{preferences::Language, section::Section};

// copy tables
//
// one static table per language.  everything the sections print goes through here
// so that the language toggle re-renders the whole page in one step
#[derive(Debug)]
pub struct Strings {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub stats: StatsStrings,
    pub skills: SkillsStrings,
    pub experience: ExperienceStrings,
    pub projects: ProjectsStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
}

#[derive(Debug)]
pub struct NavStrings {
    pub home: &'static str,
    pub about: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub experience: &'static str,
    pub contact: &'static str,
    pub toggle_theme: &'static str,
    pub toggle_language: &'static str,
    pub toggle_menu: &'static str,
}

impl NavStrings {
    pub fn label(&self, section: Section) -> &'static str {
        match section {
            Section::Home => self.home,
            Section::About => self.about,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Experience => self.experience,
            Section::Contact => self.contact,
        }
    }
}

#[derive(Debug)]
pub struct HeroStrings {
    pub greeting: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub scroll: &'static str,
}

#[derive(Debug)]
pub struct AboutStrings {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct StatsStrings {
    pub experience_years: &'static str,
    pub projects: &'static str,
    pub technologies: &'static str,
}

#[derive(Debug)]
pub struct SkillsStrings {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct ExperienceItem {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
}

#[derive(Debug)]
pub struct ExperienceStrings {
    pub title: &'static str,
    pub present: &'static str,
    pub items: &'static [ExperienceItem],
}

#[derive(Debug)]
pub struct ProjectsStrings {
    pub title: &'static str,
    pub view: &'static str,
    pub repo: &'static str,
}

#[derive(Debug)]
pub struct ContactStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub message_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub alert_success: &'static str,
    pub alert_failure: &'static str,
    pub alert_config: &'static str,
    pub alert_missing: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub back_to_top: &'static str,
}

#[derive(Debug)]
pub struct FooterStrings {
    pub rights: &'static str,
}

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

const SHARED_SKILLS: &[&str] = &["React", "TypeScript", "TailwindCSS", "Playwright", "Git", "Figma"];

static EN: Strings = Strings {
    nav: NavStrings {
        home: "Home",
        about: "About",
        skills: "Skills",
        projects: "Projects",
        experience: "Experience",
        contact: "Contact",
        toggle_theme: "Toggle theme",
        toggle_language: "Toggle language",
        toggle_menu: "Toggle navigation menu",
    },
    hero: HeroStrings {
        greeting: "👋 Hello, I'm",
        name: "Jane Doe",
        title: "Front-End Developer",
        bio: "Passionate about crafting clean, user-friendly interfaces that bring ideas to life. I specialize in building responsive, modern web applications with attention to detail.",
        scroll: "Scroll",
    },
    about: AboutStrings {
        title: "About Me",
        description: "I'm a passionate developer who loves creating beautiful and functional web experiences. With a strong foundation in modern web technologies, I strive to build applications that solve real-world problems.",
    },
    stats: StatsStrings {
        experience_years: "Experience Years",
        projects: "Projects",
        technologies: "Technologies",
    },
    skills: SkillsStrings {
        title: "My Skills",
        description: "Technologies I work with",
    },
    experience: ExperienceStrings {
        title: "My Experience",
        present: "Present",
        items: &[ExperienceItem {
            role: "Front-End Developer",
            company: "Acme",
            duration: "2024 - Present",
            description: "Working as a front-end developer, gaining hands-on experience with modern web development practices and enterprise-level applications.",
            achievements: &[
                "Developed responsive UI components using React and modern CSS techniques",
                "Collaborated with senior developers on feature implementations",
                "Applied best practices for code quality, testing, and version control",
                "Participated in agile development processes and code reviews",
            ],
            skills: SHARED_SKILLS,
        }],
    },
    projects: ProjectsStrings {
        title: "Featured Projects",
        view: "View Project",
        repo: "GitHub Repo",
    },
    contact: ContactStrings {
        title: "Get In Touch",
        description: "Have a project in mind or just want to say hello? Feel free to reach out!",
        name_label: "Your Name",
        email_label: "Your Email",
        message_label: "Message",
        name_placeholder: "John Doe",
        email_placeholder: "john@example.com",
        message_placeholder: "Your message here...",
        send: "Send Message",
        sending: "Sending...",
        alert_success: "Thanks for your message! I'll get back to you soon.",
        alert_failure: "Failed to send message. Please try again later.",
        alert_config: "Configuration missing. The contact form is not set up yet.",
        alert_missing: "Please fill in every field.",
        email: "Email",
        linkedin: "LinkedIn",
        github: "GitHub",
        back_to_top: "Scroll to top",
    },
    footer: FooterStrings {
        rights: "All rights reserved.",
    },
};

static AR: Strings = Strings {
    nav: NavStrings {
        home: "الرئيسية",
        about: "عني",
        skills: "المهارات",
        projects: "المشاريع",
        experience: "الخبرة",
        contact: "تواصل معي",
        toggle_theme: "تبديل المظهر",
        toggle_language: "تبديل اللغة",
        toggle_menu: "القائمة",
    },
    hero: HeroStrings {
        greeting: "👋 مرحبًا، أنا",
        name: "جين دو",
        title: "مطور واجهات أمامية",
        bio: "شغوف بإنشاء واجهات مستخدم نظيفة وسهلة الاستخدام تبث الحياة في الأفكار أتخصص في بناء تطبيقات ويب حديثة ومتجاوبة مع الاهتمام بالتفاصيل.",
        scroll: "تمرير",
    },
    about: AboutStrings {
        title: "عني",
        description: "أنا مطور شغوف أحب إنشاء تجارب ويب جميلة وعملية مع أساس قوي في تقنيات الويب الحديثة، أسعى لبناء تطبيقات تحل مشاكل العالم الحقيقي.",
    },
    stats: StatsStrings {
        experience_years: "سنوات الخبرة",
        projects: "مشاريع",
        technologies: "تقنيات",
    },
    skills: SkillsStrings {
        title: "مهاراتي",
        description: "التقنيات التي أعمل بها",
    },
    experience: ExperienceStrings {
        title: "خبرتي العملية",
        present: "الان",
        items: &[ExperienceItem {
            role: "مطور واجهات أمامية",
            company: "أكمي",
            duration: "٢٠٢٤ - الان",
            description: "العمل كمطور واجهات أمامية، واكتساب خبرة عملية في ممارسات تطوير الويب الحديثة وتطبيقات المؤسسات.",
            achievements: &[
                "تطوير واجهات مستخدم متجاوبة باستخدام React وتقنيات CSS الحديثة",
                "التعاون مع كبار المطورين لتنفيذ الميزات الجديدة",
                "تطبيق أفضل الممارسات لجودة البرمجيات والاختبارات وأنظمة التحكم في النسخ",
                "المشاركة في عمليات التطوير بمنهجية أجايل ومراجعة الأكواد",
            ],
            skills: SHARED_SKILLS,
        }],
    },
    projects: ProjectsStrings {
        title: "مشاريع مميزة",
        view: "عرض المشروع",
        repo: "مستودع GitHub",
    },
    contact: ContactStrings {
        title: "تواصل معي",
        description: "هل لديك مشروع في ذهنك أو تريد فقط إلقاء التحية؟ لا تتردد في التواصل!",
        name_label: "الاسم",
        email_label: "البريد الإلكتروني",
        message_label: "الرسالة",
        name_placeholder: "الاسم الكامل",
        email_placeholder: "example@mail.com",
        message_placeholder: "اكتب رسالتك هنا...",
        send: "إرسال الرسالة",
        sending: "جارٍ الإرسال...",
        alert_success: "شكرًا لرسالتك! سأرد عليك قريبًا.",
        alert_failure: "تعذر إرسال الرسالة. حاول مرة أخرى لاحقًا.",
        alert_config: "الإعدادات ناقصة. نموذج التواصل غير مهيأ بعد.",
        alert_missing: "يرجى تعبئة جميع الحقول.",
        email: "البريد الإلكتروني",
        linkedin: "لينكد إن",
        github: "قيت هب",
        back_to_top: "العودة للأعلى",
    },
    footer: FooterStrings {
        rights: "جميع الحقوق محفوظة.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SECTIONS;

    #[test]
    fn every_section_has_a_label_in_both_languages() {
        for language in [Language::En, Language::Ar] {
            let nav = &strings(language).nav;
            for section in SECTIONS {
                assert!(!nav.label(section).is_empty());
            }
        }
    }

    #[test]
    fn tables_line_up() {
        let (en, ar) = (strings(Language::En), strings(Language::Ar));

        assert_eq!(en.experience.items.len(), ar.experience.items.len());
        for (a, b) in en.experience.items.iter().zip(ar.experience.items) {
            assert_eq!(a.achievements.len(), b.achievements.len());
        }
        assert_eq!(en.nav.contact, "Contact");
        assert_eq!(ar.nav.home, "الرئيسية");
    }
}
