//! Phrases shipped with the application.
//!
//! Ids are plain numbers; user phrases always carry the `custom-` marker, so
//! the two sets never collide.

use super::CategoryId;

pub(crate) struct BuiltinPhrase {
    pub id: &'static str,
    pub russian: &'static str,
    pub english: &'static str,
    pub transcription: &'static str,
    pub category: CategoryId,
}

pub(crate) const BUILTIN_PHRASES: &[BuiltinPhrase] = &[
    BuiltinPhrase {
        id: "1",
        russian: "Помощь идёт",
        english: "Help is coming",
        transcription: "[help ɪz ˈkʌmɪŋ]",
        category: CategoryId::Emergency,
    },
    BuiltinPhrase {
        id: "2",
        russian: "Вы в безопасности",
        english: "You are safe",
        transcription: "[juː ɑːr seɪf]",
        category: CategoryId::Emergency,
    },
    BuiltinPhrase {
        id: "3",
        russian: "Оставайтесь спокойны",
        english: "Stay calm",
        transcription: "[steɪ kɑːm]",
        category: CategoryId::Emergency,
    },
    BuiltinPhrase {
        id: "4",
        russian: "Следуйте за мной",
        english: "Follow me",
        transcription: "[ˈfɒləʊ miː]",
        category: CategoryId::Emergency,
    },
    BuiltinPhrase {
        id: "5",
        russian: "Не двигайтесь",
        english: "Don't move",
        transcription: "[dəʊnt muːv]",
        category: CategoryId::Emergency,
    },
    BuiltinPhrase {
        id: "6",
        russian: "Где болит?",
        english: "Where does it hurt?",
        transcription: "[weər dʌz ɪt hɜːrt]",
        category: CategoryId::Medical,
    },
    BuiltinPhrase {
        id: "7",
        russian: "У вас аллергия?",
        english: "Do you have allergies?",
        transcription: "[duː juː hæv ˈælədʒiz]",
        category: CategoryId::Medical,
    },
    BuiltinPhrase {
        id: "8",
        russian: "Принимаете ли вы лекарства?",
        english: "Are you taking any medication?",
        transcription: "[ɑːr juː ˈteɪkɪŋ ˈɛni ˌmɛdɪˈkeɪʃən]",
        category: CategoryId::Medical,
    },
    BuiltinPhrase {
        id: "9",
        russian: "Можете дышать?",
        english: "Can you breathe?",
        transcription: "[kæn juː briːð]",
        category: CategoryId::Medical,
    },
    BuiltinPhrase {
        id: "10",
        russian: "Скорая помощь в пути",
        english: "Ambulance is on the way",
        transcription: "[ˈæmbjʊləns ɪz ɒn ðə weɪ]",
        category: CategoryId::Medical,
    },
    BuiltinPhrase {
        id: "11",
        russian: "Идите к выходу",
        english: "Go to the exit",
        transcription: "[ɡəʊ tuː ði ˈɛɡzɪt]",
        category: CategoryId::Evacuation,
    },
    BuiltinPhrase {
        id: "12",
        russian: "Здесь опасно",
        english: "It's dangerous here",
        transcription: "[ɪts ˈdeɪndʒərəs hɪər]",
        category: CategoryId::Evacuation,
    },
    BuiltinPhrase {
        id: "13",
        russian: "Берите самое необходимое",
        english: "Take only essentials",
        transcription: "[teɪk ˈəʊnli ɪˈsɛnʃəlz]",
        category: CategoryId::Evacuation,
    },
    BuiltinPhrase {
        id: "14",
        russian: "Собирайтесь здесь",
        english: "Gather here",
        transcription: "[ˈɡæðər hɪər]",
        category: CategoryId::Evacuation,
    },
    BuiltinPhrase {
        id: "15",
        russian: "Не возвращайтесь назад",
        english: "Don't go back",
        transcription: "[dəʊnt ɡəʊ bæk]",
        category: CategoryId::Evacuation,
    },
    BuiltinPhrase {
        id: "16",
        russian: "Как вас зовут?",
        english: "What's your name?",
        transcription: "[wɒts jɔːr neɪm]",
        category: CategoryId::Basic,
    },
    BuiltinPhrase {
        id: "17",
        russian: "Вы понимаете меня?",
        english: "Do you understand me?",
        transcription: "[duː juː ˌʌndəˈstænd miː]",
        category: CategoryId::Basic,
    },
    BuiltinPhrase {
        id: "18",
        russian: "Вам нужна помощь?",
        english: "Do you need help?",
        transcription: "[duː juː niːd hɛlp]",
        category: CategoryId::Basic,
    },
    BuiltinPhrase {
        id: "19",
        russian: "Где вы?",
        english: "Where are you?",
        transcription: "[weər ɑːr juː]",
        category: CategoryId::Basic,
    },
    BuiltinPhrase {
        id: "20",
        russian: "Всё будет хорошо",
        english: "Everything will be okay",
        transcription: "[ˈɛvrɪθɪŋ wɪl biː ˌəʊˈkeɪ]",
        category: CategoryId::Basic,
    },
];
