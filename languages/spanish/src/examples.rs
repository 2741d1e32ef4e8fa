use wordlists_core::examples::{CuratedExamples, ExampleTemplate};

pub const SPANISH_TEMPLATE: &str = r#"La palabra "{word}" es muy útil en el contexto de {topic}."#;
pub const ENGLISH_TEMPLATE: &str = r#"The word "{word}" is useful in the context of {topic}."#;
pub const RUSSIAN_TEMPLATE: &str = "Слово «{word}» полезно в контексте {topic}.";

pub fn templates() -> Vec<(&'static str, ExampleTemplate)> {
    vec![
        ("es", ExampleTemplate::new(SPANISH_TEMPLATE)),
        ("en", ExampleTemplate::new(ENGLISH_TEMPLATE)),
        ("ru", ExampleTemplate::new(RUSSIAN_TEMPLATE)),
    ]
}

pub fn english() -> CuratedExamples {
    CuratedExamples::new()
        .with_topic(
            "alimentación",
            &[
                ("healthy food", "I try to eat healthy food every day."),
                ("vegetables", "Fresh vegetables are essential for good nutrition."),
                ("protein", "Fish is an excellent source of protein."),
                ("vitamins", "Fruits provide many important vitamins."),
                ("recipe", "This recipe is easy to follow."),
                ("cooking", "I enjoy cooking traditional dishes."),
                ("restaurant", "We went to a nice restaurant yesterday."),
            ],
        )
        .with_topic(
            "trabajo",
            &[
                ("work", "I work in an office downtown."),
                ("job", "She found a new job last month."),
                ("salary", "The salary is competitive for this position."),
                ("interview", "I have a job interview tomorrow."),
                ("experience", "Previous experience is required."),
                ("contract", "Please sign the employment contract."),
            ],
        )
        .with_topic(
            "educación",
            &[
                ("study", "I study Spanish three times a week."),
                ("school", "The school is very well equipped."),
                ("student", "She is an excellent student."),
                ("teacher", "Our teacher is very patient."),
                ("exam", "The final exam is next week."),
                ("university", "He graduated from university last year."),
            ],
        )
        .with_topic(
            "viajes,_alojamiento_y_transporte",
            &[
                ("travel", "I love to travel to new countries."),
                ("hotel", "We booked a hotel near the beach."),
                ("ticket", "I bought a train ticket online."),
                ("passport", "Don't forget your passport!"),
                ("luggage", "My luggage is quite heavy."),
                ("flight", "The flight was delayed by two hours."),
            ],
        )
}

pub fn russian() -> CuratedExamples {
    CuratedExamples::new()
        .with_topic(
            "alimentación",
            &[
                ("здоровая пища", "Я стараюсь есть здоровую пищу каждый день."),
                ("овощи", "Свежие овощи необходимы для хорошего питания."),
                ("белок", "Рыба - отличный источник белка."),
                ("витамины", "Фрукты содержат много важных витаминов."),
                ("рецепт", "Этому рецепту легко следовать."),
                ("готовка", "Мне нравится готовить традиционные блюда."),
                ("ресторан", "Вчера мы ходили в хороший ресторан."),
            ],
        )
        .with_topic(
            "trabajo",
            &[
                ("работа", "Я работаю в офисе в центре города."),
                ("трудоустройство", "Она нашла новую работу в прошлом месяце."),
                ("зарплата", "Зарплата конкурентоспособная для этой должности."),
                ("собеседование", "У меня завтра собеседование."),
                ("опыт", "Требуется предыдущий опыт работы."),
                ("контракт", "Пожалуйста, подпишите трудовой договор."),
            ],
        )
        .with_topic(
            "educación",
            &[
                ("изучать", "Я изучаю испанский три раза в неделю."),
                ("школа", "Школа очень хорошо оборудована."),
                ("студент", "Она отличная студентка."),
                ("учитель", "Наш учитель очень терпеливый."),
                ("экзамен", "Выпускной экзамен на следующей неделе."),
                ("университет", "Он окончил университет в прошлом году."),
            ],
        )
}
