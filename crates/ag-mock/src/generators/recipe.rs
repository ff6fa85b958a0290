use ag_core::payload::Recipe;
use rand::Rng;

use super::{pick, strings};

const DIFFICULTIES: &[&str] = &["Легко", "Средне", "Сложно"];

const INGREDIENTS: &[&str] = &[
    "300 г основного ингредиента",
    "2 столовые ложки растительного масла",
    "1 луковица",
    "2 зубчика чеснока",
    "1 чайная ложка соли",
    "1/2 чайной ложки черного перца",
    "Специи по вкусу",
    "200 мл воды или бульона",
];

const INSTRUCTIONS: &[&str] = &[
    "Подготовьте все ингредиенты согласно списку.",
    "Нарежьте основной ингредиент кубиками среднего размера.",
    "Мелко нарежьте лук и чеснок.",
    "Разогрейте масло в сковороде на среднем огне.",
    "Обжарьте лук до прозрачности, затем добавьте чеснок и готовьте еще 1 минуту.",
    "Добавьте основной ингредиент и обжаривайте 5-7 минут, помешивая.",
    "Добавьте соль, перец и специи, перемешайте.",
    "Влейте воду или бульон, доведите до кипения.",
    "Уменьшите огонь, накройте крышкой и тушите 20-25 минут до готовности.",
    "Подавайте горячим, при желании украсив зеленью.",
];

const TIPS: &[&str] = &[
    "Для более насыщенного вкуса можно добавить сметану или сливки в конце приготовления.",
    "Блюдо хорошо сочетается с рисом, картофелем или свежим хлебом.",
    "Оставшуюся порцию можно хранить в холодильнике до 3 дней.",
];

pub fn generate<R: Rng + ?Sized>(rng: &mut R, dish: &str) -> Recipe {
    Recipe {
        name: dish.to_string(),
        description: format!(
            "Классический рецепт блюда \"{dish}\". Это блюдо отличается насыщенным вкусом \
             и ароматом, его легко приготовить дома."
        ),
        cook_minutes: rng.gen_range(30..120),
        servings: rng.gen_range(2..=5),
        difficulty: pick(rng, DIFFICULTIES).to_string(),
        ingredients: strings(INGREDIENTS),
        instructions: strings(INSTRUCTIONS),
        tips: strings(TIPS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn recipe_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let recipe = generate(&mut rng, "борща");
        assert_eq!(recipe.name, "борща");
        assert!(recipe.description.contains("\"борща\""));
        assert!((30..120).contains(&recipe.cook_minutes));
        assert!((2..=5).contains(&recipe.servings));
        assert_eq!(recipe.ingredients.len(), 8);
        assert_eq!(recipe.instructions.len(), 10);
        assert!(DIFFICULTIES.contains(&recipe.difficulty.as_str()));
    }
}
