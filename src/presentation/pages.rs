use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::core::models::ThemeMode;
use crate::presentation::app_theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Privacy,
    Terms,
}

pub struct PageSection {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

pub struct StaticPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [PageSection],
}

const ABOUT_PAGE: StaticPage = StaticPage {
    title: "About Myanmar Handwriting OCR",
    subtitle: "Learn more about our OCR technology and mission",
    sections: &[
        PageSection {
            title: "Our Mission",
            paragraphs: &["Myanmar Handwriting OCR aims to bridge the gap between handwritten Burmese text and digital content. Our mission is to make Burmese handwritten content more accessible, searchable, and usable in the digital age."],
            bullets: &[],
        },
        PageSection {
            title: "Technology",
            paragraphs: &["Recognition runs on a dedicated OCR service that uses deep learning to recognize Burmese handwritten characters. This application prepares your image and shows the result."],
            bullets: &[
                "Desktop client: Rust with the iced toolkit",
                "OCR model: convolutional network with a bidirectional LSTM trained with CTC loss",
                "Character recognition: Burmese Unicode output",
            ],
        },
        PageSection {
            title: "How It Works",
            paragraphs: &[],
            bullets: &[
                "Image upload: drop or open an image containing handwritten Burmese text.",
                "Preparation: large images are downscaled and re-encoded before upload.",
                "Character recognition: the model analyzes the image and identifies individual characters.",
                "Text generation: recognized characters are combined into Unicode Burmese text.",
                "Result display: the digitized text is shown together with a confidence score.",
            ],
        },
        PageSection {
            title: "Future Development",
            paragraphs: &["We are continuously improving the system with these planned features:"],
            bullets: &[
                "User accounts for saving OCR history",
                "Enhanced accuracy for difficult handwriting styles",
                "Support for document layout analysis",
                "API access for developers",
            ],
        },
    ],
};

const PRIVACY_PAGE: StaticPage = StaticPage {
    title: "Privacy Policy",
    subtitle: "How we handle the images you send for recognition",
    sections: &[
        PageSection {
            title: "Information We Collect",
            paragraphs: &["When you use the OCR service, the following information is sent to it:"],
            bullets: &[
                "Images: the images you upload for OCR processing.",
                "OCR results: the text extracted from your images.",
            ],
        },
        PageSection {
            title: "How We Use Your Information",
            paragraphs: &[],
            bullets: &[
                "To provide and maintain the OCR service",
                "To improve OCR accuracy",
                "To detect and prevent technical issues or security breaches",
            ],
        },
        PageSection {
            title: "Data Retention",
            paragraphs: &["Uploaded images and OCR results are kept in memory only for the current session. Resetting the page or closing the application discards them. The only thing stored on your computer is your theme preference and the service address."],
            bullets: &[],
        },
        PageSection {
            title: "Contact Us",
            paragraphs: &["If you have any questions about this Privacy Policy, please contact us at privacy@myanmarocr.example.com."],
            bullets: &[],
        },
    ],
};

const TERMS_PAGE: StaticPage = StaticPage {
    title: "Terms of Service",
    subtitle: "Please read these terms before using the service",
    sections: &[
        PageSection {
            title: "1. Acceptance of Terms",
            paragraphs: &["By using Myanmar Handwriting OCR you agree to be bound by these Terms of Service. If you do not agree to these terms, please do not use the service."],
            bullets: &[],
        },
        PageSection {
            title: "2. Description of Service",
            paragraphs: &["Myanmar Handwriting OCR provides optical character recognition for Burmese handwritten text. You upload images containing handwritten Burmese text and receive digitized text output."],
            bullets: &[],
        },
        PageSection {
            title: "3. User Responsibilities",
            paragraphs: &["When using the service, you agree to:"],
            bullets: &[
                "Use the service only for lawful purposes",
                "Not upload content that infringes on intellectual property rights",
                "Not upload content that contains malware or harmful code",
                "Not attempt to gain unauthorized access to our systems",
            ],
        },
        PageSection {
            title: "4. Limitation of Liability",
            paragraphs: &["The service is provided on an \"as is\" and \"as available\" basis. We do not guarantee the accuracy, completeness, or reliability of OCR results."],
            bullets: &[],
        },
        PageSection {
            title: "5. Governing Law",
            paragraphs: &["These Terms shall be governed by and construed in accordance with the laws of Myanmar, without regard to its conflict of law provisions."],
            bullets: &[],
        },
    ],
};

impl Page {
    pub const NAVIGATION: [Page; 2] = [Page::Home, Page::About];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Privacy => "Privacy Policy",
            Page::Terms => "Terms of Service",
        }
    }

    pub fn static_content(self) -> Option<&'static StaticPage> {
        match self {
            Page::Home => None,
            Page::About => Some(&ABOUT_PAGE),
            Page::Privacy => Some(&PRIVACY_PAGE),
            Page::Terms => Some(&TERMS_PAGE),
        }
    }
}

pub fn render_static_page<'a, Message: 'a>(
    page: &'static StaticPage,
    mode: ThemeMode,
) -> Element<'a, Message> {
    let muted = app_theme::muted_text_color(mode);

    let mut content = column![
        text(page.title).size(30),
        text(page.subtitle)
            .size(16)
            .style(move |_theme: &iced::Theme| text::Style { color: Some(muted) }),
    ]
    .width(Length::Fill);

    for section in page.sections {
        let mut body = column![text(section.title).size(20)].spacing(8);

        for paragraph in section.paragraphs {
            body = body.push(text(*paragraph).size(15));
        }
        for bullet in section.bullets {
            body = body.push(text(format!("•  {}", bullet)).size(15));
        }

        content = content.push(
            container(body)
                .padding(20)
                .width(Length::Fill)
                .style(app_theme::card_style(mode)),
        );
    }

    content.spacing(20).into()
}
