//! Spanish -> English / Russian word tables, one row per Spanish entry.

/// (spanish, english, russian)
pub type Row = (&'static str, &'static str, &'static str);

const BODY: &[Row] = &[
    ("músculo", "muscle", "мышца"),
    ("hueso", "bone", "кость"),
    ("piel", "skin", "кожа"),
    ("corazón", "heart", "сердце"),
    ("pulmón", "lung", "лёгкое"),
    ("cuello", "neck", "шея"),
    ("hombros", "shoulders", "плечи"),
    ("pecho", "chest", "грудь"),
    ("cintura", "waist", "талия"),
    ("barriga", "belly", "живот"),
    ("rodilla", "knee", "колено"),
    ("tobillo", "ankle", "лодыжка"),
    ("codo", "elbow", "локоть"),
    ("muñeca", "wrist", "запястье"),
    ("frente", "forehead", "лоб"),
    ("mejilla", "cheek", "щека"),
    ("barbilla", "chin", "подбородок"),
    ("ceja", "eyebrow", "бровь"),
    ("pestaña", "eyelash", "ресница"),
];

const PHYSICAL_STATES: &[Row] = &[
    ("ciego", "blind", "слепой"),
    ("sordo", "deaf", "глухой"),
    ("mudo", "mute", "немой"),
    ("saliva", "saliva", "слюна"),
    ("lágrima", "tear", "слеза"),
    ("sudor", "sweat", "пот"),
    ("gesto", "gesture", "жест"),
];

const CHARACTER: &[Row] = &[
    ("optimismo", "optimism", "оптимизм"),
    ("pesimismo", "pessimism", "пессимизм"),
    ("tranquilidad", "tranquility", "спокойствие"),
    ("paciencia", "patience", "терпение"),
    ("sincero", "sincere", "искренний"),
    ("paciente", "patient", "терпеливый"),
    ("introvertido", "introverted", "интроверт"),
    ("vago", "lazy", "ленивый"),
    ("travieso", "mischievous", "озорной"),
    ("seguro", "confident", "уверенный"),
    ("conservador", "conservative", "консервативный"),
    ("hablador", "talkative", "болтливый"),
    ("arrogante", "arrogant", "высокомерный"),
];

const EMOTIONS: &[Row] = &[
    ("sentimiento", "feeling", "чувство"),
    ("amor", "love", "любовь"),
    ("amistad", "friendship", "дружба"),
    ("alegría", "joy", "радость"),
    ("tristeza", "sadness", "грусть"),
    ("miedo", "fear", "страх"),
    ("ira", "anger", "гнев"),
];

const FOOD: &[Row] = &[
    ("alimentación sana", "healthy eating", "здоровое питание"),
    ("alimentación equilibrada", "balanced diet", "сбалансированное питание"),
    ("producto natural", "natural product", "натуральный продукт"),
    ("alimento pesado", "heavy food", "тяжёлая пища"),
    ("alimento ligero", "light food", "лёгкая пища"),
    ("calorías", "calories", "калории"),
    ("vitaminas", "vitamins", "витамины"),
    ("proteínas", "proteins", "белки"),
    ("fibra", "fiber", "клетчатка"),
    ("hierro", "iron", "железо"),
    ("marisco", "seafood", "морепродукты"),
    ("especias", "spices", "специи"),
    ("embutido", "cold cuts", "колбасные изделия"),
    ("lomo", "loin", "корейка"),
    ("chorizo", "chorizo", "чоризо"),
    ("berenjena", "eggplant", "баклажан"),
    ("calabacín", "zucchini", "кабачок"),
    ("espinacas", "spinach", "шпинат"),
    ("guisantes", "peas", "горошек"),
    ("lentejas", "lentils", "чечевица"),
    ("garbanzos", "chickpeas", "нут"),
    ("bizcocho", "sponge cake", "бисквит"),
    ("cereza", "cherry", "вишня"),
    ("piña", "pineapple", "ананас"),
    ("kiwi", "kiwi", "киви"),
];

const BEVERAGES: &[Row] = &[
    ("infusión", "herbal tea", "травяной чай"),
    ("vino joven", "young wine", "молодое вино"),
    ("reserva", "reserve wine", "выдержанное вино"),
    ("refresco", "soft drink", "прохладительный напиток"),
    ("licor", "liqueur", "ликёр"),
    ("cóctel", "cocktail", "коктейль"),
];

const RELATIONSHIPS: &[Row] = &[
    ("matrimonio homosexual", "same-sex marriage", "однополый брак"),
    ("matrimonio heterosexual", "heterosexual marriage", "гетеросексуальный брак"),
    ("pareja de hecho", "civil partnership", "гражданский союз"),
    ("madre soltera", "single mother", "мать-одиночка"),
    ("niño adoptado", "adopted child", "приёмный ребёнок"),
    ("adoptar un niño", "to adopt a child", "усыновить ребёнка"),
    ("educar a un hijo", "to raise a child", "воспитывать ребёнка"),
    ("convivir con la pareja", "to live with partner", "жить с партнёром"),
    ("convivir con el novio", "to live with boyfriend", "жить с парнем"),
    ("vivir con la pareja", "to live with partner", "жить с партнёром"),
    ("vivir con el novio", "to live with boyfriend", "жить с парнем"),
    ("llevar años juntos", "to be together for years", "быть вместе годами"),
    ("llevar años en pareja", "to be in a relationship for years", "быть в отношениях годами"),
    ("tener novio", "to have a boyfriend", "иметь парня"),
    ("tener pareja", "to have a partner", "иметь партнёра"),
    ("tener una aventura", "to have an affair", "иметь роман"),
    ("tener una relación", "to have a relationship", "быть в отношениях"),
    ("empezar una relación", "to start a relationship", "начать отношения"),
    ("acabar una relación", "to end a relationship", "закончить отношения"),
    ("terminar una relación", "to end a relationship", "завершить отношения"),
    ("salir con alguien", "to date someone", "встречаться с кем-то"),
    ("romper con alguien", "to break up with someone", "расстаться с кем-то"),
    ("caer bien", "to like someone", "нравиться"),
    ("caer mal", "to dislike someone", "не нравиться"),
    ("llevarse bien", "to get along well", "хорошо ладить"),
    ("llevarse mal", "to not get along", "плохо ладить"),
    ("dar la mano", "to shake hands", "пожать руку"),
    ("dar un abrazo", "to give a hug", "обнять"),
    ("dar un beso", "to give a kiss", "поцеловать"),
    ("abrazarse", "to hug each other", "обниматься"),
    ("besarse", "to kiss each other", "целоваться"),
    ("ligar", "to flirt", "флиртовать"),
    ("colega", "colleague", "коллега"),
    ("amigo de la infancia", "childhood friend", "друг детства"),
    ("amigo de universidad", "university friend", "друг по университету"),
    ("buen amigo", "good friend", "хороший друг"),
    ("gran amigo", "great friend", "отличный друг"),
];

const CELEBRATIONS: &[Row] = &[
    ("fiesta típica", "traditional party", "традиционный праздник"),
    ("fiesta popular", "popular festival", "народный праздник"),
    ("fiesta tradicional", "traditional celebration", "традиционное торжество"),
    ("fiesta de disfraces", "costume party", "костюмированная вечеринка"),
    ("comida de Navidad", "Christmas dinner", "рождественский ужин"),
    ("comida de familia", "family meal", "семейная трапеза"),
    ("comida de negocios", "business lunch", "деловой обед"),
    ("fiesta formal", "formal party", "официальная вечеринка"),
    ("fiesta informal", "informal party", "неформальная вечеринка"),
    ("reunión formal", "formal meeting", "официальная встреча"),
    ("reunión informal", "informal meeting", "неформальная встреча"),
    ("despedida de soltero", "bachelor party", "мальчишник"),
    ("boda", "wedding", "свадьба"),
    ("cumplir años", "to have a birthday", "отмечать день рождения"),
    ("hacer un regalo", "to give a gift", "дарить подарок"),
    ("envolver un regalo", "to wrap a gift", "упаковывать подарок"),
    ("abrir un regalo", "to open a gift", "открывать подарок"),
    ("felicitar", "to congratulate", "поздравлять"),
];

const EDUCATION: &[Row] = &[
    ("universidad", "university", "университет"),
    ("colegio", "school", "школа"),
    ("estudiante", "student", "студент"),
    ("profesor", "teacher", "преподаватель"),
    ("examen", "exam", "экзамен"),
    ("nota", "grade", "оценка"),
    ("curso", "course", "курс"),
    ("asignatura", "subject", "предмет"),
    ("matrícula", "enrollment", "зачисление"),
    ("beca", "scholarship", "стипендия"),
    ("bachillerato", "high school diploma", "диплом об окончании школы"),
    ("carrera", "degree", "специальность"),
    ("máster", "master's", "магистратура"),
    ("doctorado", "doctorate", "докторантура"),
];

const WORK: &[Row] = &[
    ("trabajo", "work", "работа"),
    ("empleo", "employment", "трудоустройство"),
    ("oficina", "office", "офис"),
    ("empleado", "employee", "сотрудник"),
    ("jefe", "boss", "начальник"),
    ("sueldo", "salary", "зарплата"),
    ("contrato", "contract", "контракт"),
    ("entrevista", "interview", "собеседование"),
    ("currículum", "resume", "резюме"),
    ("horario", "schedule", "расписание"),
    ("vacaciones", "vacation", "отпуск"),
];

const TRAVEL: &[Row] = &[
    ("viaje", "trip", "путешествие"),
    ("hotel", "hotel", "отель"),
    ("billete", "ticket", "билет"),
    ("pasaporte", "passport", "паспорт"),
    ("equipaje", "luggage", "багаж"),
    ("vuelo", "flight", "рейс"),
    ("aeropuerto", "airport", "аэропорт"),
    ("estación", "station", "станция"),
    ("turismo", "tourism", "туризм"),
];

const VERBS: &[Row] = &[
    ("caminar", "to walk", "ходить"),
    ("saltar", "to jump", "прыгать"),
    ("respirar", "to breathe", "дышать"),
    ("llorar", "to cry", "плакать"),
    ("besar", "to kiss", "целовать"),
    ("abrazar", "to hug", "обнимать"),
    ("freír", "to fry", "жарить"),
    ("hervir", "to boil", "кипятить"),
    ("cocer", "to cook", "варить"),
    ("cocinar", "to cook", "готовить"),
    ("estudiar", "to study", "изучать"),
    ("aprender", "to learn", "учиться"),
    ("enseñar", "to teach", "преподавать"),
    ("trabajar", "to work", "работать"),
    ("viajar", "to travel", "путешествовать"),
];

const ATTITUDES: &[Row] = &[
    ("actitud agradable", "pleasant attitude", "приятное отношение"),
    ("actitud positiva", "positive attitude", "позитивное отношение"),
    ("actitud extraña", "strange attitude", "странное отношение"),
    ("portarse bien", "to behave well", "хорошо себя вести"),
    ("portarse mal", "to behave badly", "плохо себя вести"),
    ("tratar bien a alguien", "to treat someone well", "хорошо относиться к кому-то"),
    ("tratar mal a alguien", "to treat someone badly", "плохо относиться к кому-то"),
    ("tener una buena actitud", "to have a good attitude", "иметь хорошее отношение"),
    ("tener una mala actitud", "to have a bad attitude", "иметь плохое отношение"),
];

/// Every domain, by name
pub const DOMAINS: &[(&str, &[Row])] = &[
    ("body", BODY),
    ("physical states", PHYSICAL_STATES),
    ("character", CHARACTER),
    ("emotions", EMOTIONS),
    ("food", FOOD),
    ("beverages", BEVERAGES),
    ("relationships", RELATIONSHIPS),
    ("celebrations", CELEBRATIONS),
    ("education", EDUCATION),
    ("work", WORK),
    ("travel", TRAVEL),
    ("verbs", VERBS),
    ("attitudes", ATTITUDES),
];

pub fn rows() -> impl Iterator<Item = &'static Row> {
    DOMAINS.iter().flat_map(|(_, rows)| rows.iter())
}
