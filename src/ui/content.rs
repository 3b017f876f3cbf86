/// Static copy for every section of the page
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: [&'static str; 2],
    pub location: &'static str,
    pub specialty: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Полина Яворская",
    headline: "Креативный продюсер &\nФотограф",
    tagline: "Специализируюсь на фотосъемке для модных брендов и создании контента в Саратове",
    about: [
        "Я креативный продюсер и фотограф из Саратова, специализируюсь на фотосъемке для модных брендов и создании контента. С острым глазом на детали и страстью к визуальному повествованию, я помогаю брендам одежды создавать убедительные изображения, которые находят отклик у их аудитории.",
        "Мой подход сочетает техническую экспертизу с креативным видением, обеспечивая высококачественные результаты каждой съемки, которые соответствуют эстетике вашего бренда и маркетинговым целям.",
    ],
    location: "Саратов, Россия",
    specialty: "Фотосъемка для модных брендов",
};

pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const PORTFOLIO_HEADING: SectionHeading = SectionHeading {
    title: "Портфолио",
    subtitle: "Примеры недавних работ по фотосъемке для модных брендов и созданию контента",
};

pub const SERVICES_HEADING: SectionHeading = SectionHeading {
    title: "Услуги и цены",
    subtitle: "Профессиональные услуги фотосъемки и продакшена для модных брендов",
};

pub const RULES_HEADING: SectionHeading = SectionHeading {
    title: "Правила работы",
    subtitle: "Важная информация о условиях сотрудничества, возврате средств и переносе съемок",
};

pub const CONTACT_HEADING: SectionHeading = SectionHeading {
    title: "Свяжитесь со мной",
    subtitle: "Готовы создать потрясающий контент для вашего модного бренда? Давайте обсудим ваш проект.",
};

pub struct Package {
    pub name: &'static str,
    pub price: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub call_to_action: &'static str,
    /// Marked "most popular" and drawn with the accent border
    pub highlighted: bool,
}

pub const POPULAR_BADGE: &str = "Самый популярный";

pub static PACKAGES: [Package; 3] = [
    Package {
        name: "Базовый",
        price: "₽15,000",
        summary: "Идеально для небольших коллекций",
        features: &[
            "До 10 фотографий товаров",
            "2-часовая студийная сессия",
            "Базовая ретушь",
            "Файлы высокого разрешения",
        ],
        call_to_action: "Выбрать базовый",
        highlighted: false,
    },
    Package {
        name: "Стандартный",
        price: "₽25,000",
        summary: "Идеально для брендовых кампаний",
        features: &[
            "До 25 фотографий",
            "4-часовая студийная сессия",
            "Профессиональная ретушь",
            "Координация с моделями",
            "Консультация по стайлингу",
        ],
        call_to_action: "Выбрать стандартный",
        highlighted: true,
    },
    Package {
        name: "Премиум",
        price: "₽45,000",
        summary: "Полное производство для бренда",
        features: &[
            "До 50 фотографий",
            "Полный день съемки",
            "Продвинутая ретушь",
            "Несколько моделей",
            "Креативное направление",
            "Контент для соцсетей",
        ],
        call_to_action: "Выбрать премиум",
        highlighted: false,
    },
];

pub struct RuleBlock {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const CANCELLATION: RuleBlock = RuleBlock {
    title: "Отмена и возврат средств",
    items: &[
        "Отмена за 48 часов до съемки - возврат 100%",
        "Отмена за 24 часа до съемки - возврат 50%",
        "Отмена менее чем за 24 часа - возврат не предусмотрен",
        "При форс-мажорных обстоятельствах рассматривается индивидуально",
    ],
};

pub const RESCHEDULING: RuleBlock = RuleBlock {
    title: "Перенос съемки",
    items: &[
        "Первый перенос бесплатно (за 24 часа до съемки)",
        "Повторный перенос - доплата 20% от стоимости",
        "Перенос по погодным условиям - бесплатно",
        "Перенос по болезни (при справке) - бесплатно",
    ],
};

pub const TERMS_TITLE: &str = "Дополнительные условия";

/// (term, explanation)
pub const TERMS: [(&str, &str); 4] = [
    ("Предоплата:", "Для бронирования даты требуется предоплата 50% от стоимости услуг"),
    ("Готовность материалов:", "Обработанные фотографии предоставляются в течение 7-14 рабочих дней"),
    ("Авторские права:", "Все права на использование фотографий передаются заказчику"),
    ("Дополнительное время:", "Превышение времени съемки оплачивается дополнительно - 2000₽/час"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub const INSTAGRAM: Link = Link {
    label: "@zotovapln",
    url: "https://instagram.com/zotovapln",
};

pub const TELEGRAM: Link = Link {
    label: "@zotovapl в Telegram",
    url: "https://t.me/zotovapl",
};

pub const OFFERINGS_TITLE: &str = "Что я предлагаю:";

pub const OFFERINGS: [&str; 5] = [
    "Фотосъемка для модных брендов",
    "Предметная фотосъемка",
    "Производство контента",
    "Креативное направление",
    "Контент для социальных сетей",
];

pub struct Callout {
    pub title: &'static str,
    pub body: &'static str,
    pub action: &'static str,
}

pub const TELEGRAM_CALLOUT: Callout = Callout {
    title: "Напишите мне в Telegram",
    body: "Самый быстрый способ связаться со мной и обсудить детали вашего проекта",
    action: "Написать в Telegram",
};

pub const FOOTER_TAGLINE: &str = "Креативный продюсер и фотограф из Саратова.";
pub const FOOTER_INSTAGRAM: &str = "Подписывайтесь @zotovapln в Instagram";
pub const FOOTER_TELEGRAM: &str = "Telegram: @zotovapl";

/// Outbound links the page is allowed to open
pub const OUTBOUND_LINKS: [Link; 2] = [INSTAGRAM, TELEGRAM];

pub fn is_outbound_link(url: &str) -> bool {
    OUTBOUND_LINKS.iter().any(|link| link.url == url)
}
