/// Display names for the standard topic keys of the Spanish word lists
pub const TOPIC_NAMES: &[(&str, &str)] = &[
    ("dimensión_física", "Physical Dimension"),
    ("dimensión_perceptiva_y_anímica", "Perception and Emotions"),
    ("identidad_personal", "Personal Identity"),
    ("relaciones_personales", "Personal Relationships"),
    ("alimentación", "Food and Nutrition"),
    ("educación", "Education"),
    ("trabajo", "Work"),
    ("ocio", "Leisure"),
    ("información_y_medios_de_comunicación", "Information and Media"),
    ("vivienda", "Housing"),
    ("servicios", "Services"),
    ("compras,_tiendas_y_establecimientos", "Shopping and Stores"),
    ("salud_e_higiene", "Health and Hygiene"),
    ("viajes,_alojamiento_y_transporte", "Travel and Transport"),
    ("economía_e_industria", "Economy and Industry"),
    ("ciencia_y_tecnología", "Science and Technology"),
    ("gobierno,_política_y_sociedad", "Government and Society"),
    ("actividades_artísticas", "Arts and Culture"),
    ("religión_y_filosofía", "Religion and Philosophy"),
    ("geografía_y_naturaleza", "Geography and Nature"),
];
