use voamigo::catalog::{Locale, MessageCatalog};

#[test]
fn test_locale_from_tag() {
    assert_eq!(Locale::from_tag("pt-BR"), Locale::PtBr);
    assert_eq!(Locale::from_tag("pt"), Locale::PtBr);
    assert_eq!(Locale::from_tag("en"), Locale::En);
    assert_eq!(Locale::from_tag("en-US"), Locale::En);
    assert_eq!(Locale::from_tag("en_GB"), Locale::En);
    assert_eq!(Locale::from_tag("EN"), Locale::En);
}

#[test]
fn test_unknown_tag_falls_back_to_pt_br() {
    assert_eq!(Locale::from_tag(""), Locale::PtBr);
    assert_eq!(Locale::from_tag("fr"), Locale::PtBr);
    assert_eq!(Locale::from_tag("xx-YY"), Locale::PtBr);
}

#[test]
fn test_catalog_strings_follow_locale() {
    let pt = MessageCatalog::new(Locale::PtBr);
    let en = MessageCatalog::new(Locale::En);

    assert_eq!(pt.send_failed(), "Erro ao enviar mensagem");
    assert_eq!(
        pt.retry_reply(),
        "Desculpe, ocorreu um erro. Por favor, tente novamente."
    );
    assert_ne!(pt.send_failed(), en.send_failed());
    assert_ne!(pt.retry_reply(), en.retry_reply());
}

#[test]
fn test_default_catalog_is_pt_br() {
    assert_eq!(MessageCatalog::default().locale(), Locale::PtBr);
}
