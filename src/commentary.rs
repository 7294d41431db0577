//! Goal-aware commentary for nutrient intake deviations.
//!
//! Every nutrient has one comment per goal, color tier and deviation sign.
//! The tables are plain nested structs so a missing entry fails to compile.

use crate::models::{Goal, Tier};
use crate::nutrients::Nutrient;

/// Returned when a nutrient name has no commentary table.
pub const NO_COMMENT: &str = "Comentario no disponible para este nutriente.";

/// Whether intake landed at or above the target, or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Over,
    Under,
}

impl Sign {
    /// A deviation of exactly zero counts as over.
    pub fn of(deviation: i64) -> Self {
        if deviation >= 0 {
            Sign::Over
        } else {
            Sign::Under
        }
    }
}

#[derive(Debug)]
pub struct Signed {
    pub over: &'static str,
    pub under: &'static str,
}

#[derive(Debug)]
pub struct ByTier {
    pub green: Signed,
    pub amber: Signed,
    pub red: Signed,
}

#[derive(Debug)]
pub struct ByGoal {
    pub maintain: ByTier,
    pub lose: ByTier,
    pub gain: ByTier,
    pub recomposition: ByTier,
    pub performance: ByTier,
}

impl ByGoal {
    /// Unrecognised goals read from the maintain bucket.
    pub fn for_goal(&self, goal: Option<Goal>) -> &ByTier {
        match goal.unwrap_or(Goal::Maintain) {
            Goal::Maintain => &self.maintain,
            Goal::Lose => &self.lose,
            Goal::Gain => &self.gain,
            Goal::Recomposition => &self.recomposition,
            Goal::Performance => &self.performance,
        }
    }
}

impl ByTier {
    pub fn for_tier(&self, tier: Tier) -> &Signed {
        match tier {
            Tier::Green => &self.green,
            Tier::Amber => &self.amber,
            Tier::Red => &self.red,
        }
    }
}

impl Signed {
    pub fn for_sign(&self, sign: Sign) -> &'static str {
        match sign {
            Sign::Over => self.over,
            Sign::Under => self.under,
        }
    }
}

/// Commentary table of a nutrient.
pub fn table(nutrient: Nutrient) -> &'static ByGoal {
    match nutrient {
        Nutrient::Protein => &PROTEIN,
        Nutrient::Carbohydrate => &CARBOHYDRATE,
        Nutrient::Fat => &FAT,
        Nutrient::SaturatedFat => &SATURATED_FAT,
        Nutrient::Sugar => &SUGAR,
        Nutrient::Fiber => &FIBER,
        Nutrient::Iron => &IRON,
        Nutrient::Calcium => &CALCIUM,
        Nutrient::Sodium => &SODIUM,
        Nutrient::Potassium => &POTASSIUM,
    }
}

pub fn comment(nutrient: Nutrient, goal: Option<Goal>, tier: Tier, sign: Sign) -> &'static str {
    table(nutrient)
        .for_goal(goal)
        .for_tier(tier)
        .for_sign(sign)
}

/// Look up a comment by nutrient label or storage key.
pub fn comment_by_name(name: &str, goal: Option<Goal>, tier: Tier, deviation: i64) -> &'static str {
    match name.parse::<Nutrient>() {
        Ok(nutrient) => comment(nutrient, goal, tier, Sign::of(deviation)),
        Err(_) => NO_COMMENT,
    }
}

const PROTEIN: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Estás dentro del rango ideal para mantener tu masa muscular.",
            under: "Buen equilibrio proteico para mantener tu composición corporal.",
        },
        amber: Signed {
            over: "Estás algo por encima. Asegúrate de que no desplaces otros nutrientes.",
            under: "Estás algo por debajo. Podrías perder músculo con el tiempo.",
        },
        red: Signed {
            over: "Muy por encima. Puede ser innecesario si no entrenas regularmente.",
            under: "Muy por debajo. Riesgo de pérdida muscular si se mantiene.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Tu ingesta proteica está dentro del rango ideal. Esto ayuda a preservar músculo mientras reduces grasa.",
            under: "Tu ingesta proteica está en el rango correcto para evitar pérdida muscular durante el déficit calórico.",
        },
        amber: Signed {
            over: "Estás ligeramente por encima de lo recomendado. Puede ser útil si haces ejercicio intenso, pero vigila el balance general.",
            under: "Estás algo por debajo de lo ideal. Podrías perder masa muscular si esto se mantiene.",
        },
        red: Signed {
            over: "Estás muy por encima del valor recomendado. Esto puede dificultar el déficit calórico necesario para perder grasa.",
            under: "Estás muy por debajo. Riesgo de pérdida muscular y fatiga general.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Ingesta proteica óptima para crecimiento muscular. Buen trabajo.",
            under: "Buena cantidad de proteínas para desarrollar masa muscular.",
        },
        amber: Signed {
            over: "Algo por encima. Puede ser útil si entrenas fuerte, pero sin excesos.",
            under: "Estás por debajo. Esto puede ralentizar tu progreso muscular.",
        },
        red: Signed {
            over: "Muy por encima. El exceso no genera más músculo y puede forzar al sistema renal.",
            under: "Muy por debajo. Difícil progresar sin suficiente proteína.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Ingesta adecuada para recomposición: sostenés músculo mientras pierdes grasa.",
            under: "Buen equilibrio. Mantendrás masa mientras reduces grasa.",
        },
        amber: Signed {
            over: "Algo por encima. Puede ser útil, pero no debe desplazar otros nutrientes clave.",
            under: "Estás algo por debajo. Esto afecta la recomposición corporal.",
        },
        red: Signed {
            over: "Muy por encima. Puede romper el equilibrio nutricional necesario.",
            under: "Muy por debajo. Afecta negativamente tus resultados de recomposición.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Buen rango proteico para apoyar rendimiento y recuperación.",
            under: "Ingesta equilibrada para soportar tu nivel de actividad.",
        },
        amber: Signed {
            over: "Ligeramente por encima. Bien si haces fuerza, pero no descuides hidratos.",
            under: "Algo por debajo. Puedes tener problemas para recuperarte.",
        },
        red: Signed {
            over: "Demasiada proteína. Puede desplazar nutrientes clave como hidratos.",
            under: "Muy poca proteína. Afecta recuperación, fuerza y rendimiento.",
        },
    },
};

const CARBOHYDRATE: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Tus hidratos están en el rango adecuado para mantener tu energía y composición corporal.",
            under: "Ingesta equilibrada para mantener peso y rendimiento estable.",
        },
        amber: Signed {
            over: "Estás algo por encima. Puedes sentirte con energía, pero vigila si aparece ganancia de peso.",
            under: "Estás algo por debajo. Puede afectar tu vitalidad o causar ansiedad por comida.",
        },
        red: Signed {
            over: "Muy por encima del rango. Esto puede generar ganancia de peso si no ajustas otros nutrientes.",
            under: "Ingesta muy baja. Riesgo de cansancio, irritabilidad y menor rendimiento.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Tu ingesta de hidratos está dentro del margen recomendado para una pérdida de peso saludable. Esto te permite tener energía sin frenar el progreso.",
            under: "Estás dentro del margen óptimo. Este nivel de hidratos ayuda a mantener energía sin comprometer el déficit calórico.",
        },
        amber: Signed {
            over: "Estás algo por encima del rango recomendado. Podría ralentizar tu pérdida de grasa si no mantienes un balance calórico adecuado.",
            under: "Estás algo por debajo del rango. Puedes sentir fatiga o hambre si esta situación se prolonga.",
        },
        red: Signed {
            over: "Estás muy por encima de lo recomendado. Esto puede dificultar alcanzar un déficit calórico, especialmente si los hidratos provienen de azúcares simples.",
            under: "Ingesta muy baja de hidratos. Puedes experimentar fatiga, malestar y rendimiento reducido.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Buena cantidad de hidratos. Te aporta energía para entrenar y apoyar la ganancia muscular.",
            under: "Estás en el rango correcto para favorecer el entrenamiento y la recuperación.",
        },
        amber: Signed {
            over: "Estás algo por encima. Vigila que no desplace proteínas o grasas saludables.",
            under: "Estás algo por debajo. Esto podría afectar tu rendimiento si entrenas intensamente.",
        },
        red: Signed {
            over: "Estás muy por encima. Puede aumentar el almacenamiento de grasa si no hay suficiente estímulo físico.",
            under: "Muy por debajo. Falta energía para entrenar y recuperarte adecuadamente.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Estás en un buen punto. Esta cantidad te da energía sin obstaculizar la quema de grasa.",
            under: "Rango ideal para permitir entrenamiento y mejora corporal progresiva.",
        },
        amber: Signed {
            over: "Un poco por encima. Puede ser útil si entrenas fuerte, pero vigila el balance global.",
            under: "Estás algo por debajo. Podrías tener menor rendimiento en entrenamientos exigentes.",
        },
        red: Signed {
            over: "Exceso importante. Puede frenar la pérdida de grasa en recomposición corporal.",
            under: "Déficit fuerte. Riesgo de malestar y pérdida de rendimiento.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Excelente. Te aporta energía sostenida para rendir y recuperarte.",
            under: "Buen nivel para mantener fuerza, resistencia y claridad mental.",
        },
        amber: Signed {
            over: "Estás algo por encima. Puede ser útil en días de alta carga, pero ajústalo al contexto.",
            under: "Estás algo por debajo. Puedes notar menor rendimiento o fatiga temprana.",
        },
        red: Signed {
            over: "Demasiado alto. Puede causar digestión lenta o sensación de pesadez.",
            under: "Muy bajo. Afecta directamente tu rendimiento y recuperación.",
        },
    },
};

const FAT: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Ingesta grasa estable. Ayuda a mantener energía y composición corporal.",
            under: "Buen equilibrio para sostener tu peso y salud.",
        },
        amber: Signed {
            over: "Estás algo por encima. Vigila si aumenta tu peso o sensación de pesadez.",
            under: "Estás algo por debajo. Puede impactar tu vitalidad y saciedad.",
        },
        red: Signed {
            over: "Muy por encima del rango. Puede conducir a ganancia de grasa innecesaria.",
            under: "Ingesta muy baja. Riesgo de alteración hormonal y malestar.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Tu ingesta de grasas está en un rango adecuado. Esto permite mantener funciones hormonales y energía sin frenar tu objetivo de pérdida de peso.",
            under: "Buen control lipídico. Reduces calorías manteniendo salud metabólica.",
        },
        amber: Signed {
            over: "Estás algo por encima. Vigila que no te aleje del déficit calórico necesario para perder grasa.",
            under: "Estás algo por debajo. Esto puede afectar funciones hormonales si se mantiene.",
        },
        red: Signed {
            over: "Ingesta muy alta de grasas. Puede frenar la pérdida de grasa corporal.",
            under: "Ingesta muy baja. Riesgo de fatiga, desregulación hormonal y baja saciedad.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Buen aporte graso para apoyar funciones hormonales mientras ganas masa.",
            under: "Aporte lipídico adecuado para permitir una ganancia limpia.",
        },
        amber: Signed {
            over: "Estás algo por encima. Aumenta el riesgo de ganar grasa junto con músculo.",
            under: "Estás algo por debajo. Puede afectar tus niveles hormonales.",
        },
        red: Signed {
            over: "Demasiada grasa. Puedes estar almacenando más grasa corporal de la deseada.",
            under: "Grasas demasiado bajas. Posibles consecuencias hormonales y menor energía.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Buen equilibrio de grasas. Apoya tu transformación corporal.",
            under: "Reducción controlada. Mantienes energía y salud.",
        },
        amber: Signed {
            over: "Un poco alto. Puede frenar la recomposición si no hay control calórico.",
            under: "Algo bajo. Cuida que no afecte tu metabolismo.",
        },
        red: Signed {
            over: "Exceso marcado. Podrías acumular grasa fácilmente.",
            under: "Déficit graso fuerte. Afecta salud hormonal y rendimiento.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Grasa bien gestionada. Buena fuente de energía para rendimiento sostenido.",
            under: "Buen nivel. No compromete energía ni recuperación.",
        },
        amber: Signed {
            over: "Algo alto. Útil en deportes de resistencia, pero no debe desplazar otros nutrientes.",
            under: "Algo bajo. Riesgo de fatiga en esfuerzos prolongados.",
        },
        red: Signed {
            over: "Muy alto. Puede causar pesadez y digestión lenta.",
            under: "Muy bajo. Puede afectar energía, saciedad y balance hormonal.",
        },
    },
};

const SATURATED_FAT: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Ingesta bajo control. Ideal para preservar la salud cardiovascular.",
            under: "Buena gestión de saturadas. Ayuda a mantener tu bienestar a largo plazo.",
        },
        amber: Signed {
            over: "Estás algo por encima. Vigila fuentes como embutidos, bollería o fritos.",
            under: "Estás algo por debajo. No es negativo, pero asegúrate de cubrir tus grasas saludables.",
        },
        red: Signed {
            over: "Demasiada grasa saturada. Esto puede elevar el colesterol y el riesgo cardiovascular.",
            under: "Ingesta muy baja. No suele representar un problema.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Tu ingesta de grasas saturadas está dentro del rango recomendado. Esto es esencial para proteger tu salud cardiovascular mientras reduces peso.",
            under: "Buen control de saturadas. Evitas su exceso sin comprometer tu alimentación.",
        },
        amber: Signed {
            over: "Estás algo por encima del rango. Podría dificultar la pérdida de grasa y afectar tu salud a largo plazo.",
            under: "Estás algo por debajo. No es preocupante, pero asegúrate de tener un balance general adecuado.",
        },
        red: Signed {
            over: "Ingesta muy alta de saturadas. Riesgo elevado de efectos negativos en tu salud cardíaca.",
            under: "Ingesta muy baja. No suele ser un problema, pero revisa que tu dieta esté equilibrada.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Estás en el rango aceptable. Las grasas saturadas deben mantenerse bajo control incluso en fase de volumen.",
            under: "Control correcto de saturadas. Esto favorece una ganancia limpia y saludable.",
        },
        amber: Signed {
            over: "Estás algo por encima. Riesgo de ganar grasa corporal poco saludable.",
            under: "Estás algo por debajo. Está bien si el resto de grasas están equilibradas.",
        },
        red: Signed {
            over: "Exceso preocupante de saturadas. Puede perjudicar tu salud metabólica.",
            under: "Muy bajo en saturadas. Esto es positivo, pero revisa el balance general de grasas.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Ingesta controlada. Esto favorece la recomposición corporal sin riesgos para tu salud.",
            under: "Buena gestión de grasas saturadas. Beneficia tu objetivo.",
        },
        amber: Signed {
            over: "Estás algo por encima. Puedes comprometer tus resultados si se mantiene.",
            under: "Estás algo por debajo. En general, no es preocupante.",
        },
        red: Signed {
            over: "Exceso importante. Podría perjudicar tu salud y composición corporal.",
            under: "Nivel muy bajo. Mantenerlo así no representa riesgos.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Buen equilibrio. Mantienes energía sin exceder grasas poco saludables.",
            under: "Buena gestión lipídica. Apoya tu rendimiento sin riesgos.",
        },
        amber: Signed {
            over: "Estás algo por encima. Podría afectar tu recuperación si se mantiene.",
            under: "Estás algo por debajo. No suele tener impacto negativo.",
        },
        red: Signed {
            over: "Exceso severo. Puede comprometer salud y eficiencia metabólica.",
            under: "Muy bajo en saturadas. Recomendable mantenerlo así.",
        },
    },
};

const SUGAR: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Buena gestión de azúcares. Ayuda a estabilizar energía y evitar fluctuaciones.",
            under: "Ingesta equilibrada. Favorece estabilidad metabólica.",
        },
        amber: Signed {
            over: "Estás algo por encima. Podrías notar más hambre o cambios de humor si es constante.",
            under: "Estás algo por debajo. Bien, si tu dieta es rica en alimentos integrales.",
        },
        red: Signed {
            over: "Exceso significativo. Riesgo de acumulación de grasa y cansancio tras los picos.",
            under: "Muy bajo. No es un problema si hay buena base de hidratos complejos.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Ingesta de azúcares dentro de un rango saludable. Esto facilita el control del apetito y la pérdida de grasa.",
            under: "Excelente. Mantienes bajo el consumo de azúcares sin comprometer tu energía.",
        },
        amber: Signed {
            over: "Estás algo por encima. Puede dificultar el déficit calórico si se mantiene.",
            under: "Algo por debajo. No representa un riesgo, pero revisa tu energía general.",
        },
        red: Signed {
            over: "Exceso importante de azúcares. Dificulta el control del peso y puede aumentar el riesgo de antojos y picos glucémicos.",
            under: "Ingesta muy baja. Puede ser beneficiosa, siempre que haya buenos carbohidratos complejos.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Buen rango. Apoyas tu energía sin pasarte con azúcares simples.",
            under: "Ingesta controlada. Buena base para una ganancia limpia.",
        },
        amber: Signed {
            over: "Algo elevado. Cuidado con fuentes de azúcar refinada innecesaria.",
            under: "Algo bajo. Vigila si notas falta de energía durante el día.",
        },
        red: Signed {
            over: "Exceso de azúcar. Podrías ganar grasa de forma indeseada.",
            under: "Muy bajo. Puede afectar tu rendimiento o recuperación si no se compensa con otros carbohidratos.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Equilibrio adecuado. Tienes energía sin comprometer la pérdida de grasa.",
            under: "Control ideal de azúcares. Apoya una recomposición saludable.",
        },
        amber: Signed {
            over: "Algo por encima. Reduce el azúcar simple si buscas más definición.",
            under: "Algo por debajo. Cuida tu energía si haces entrenamientos intensos.",
        },
        red: Signed {
            over: "Demasiado azúcar. Dificulta la mejora de tu composición corporal.",
            under: "Muy bajo. Bien si estás compensando con hidratos complejos.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Buen rango. Aporta energía sin sobrecargar el sistema.",
            under: "Bien. Mantienes la glucosa estable sin déficit.",
        },
        amber: Signed {
            over: "Algo elevado. Puede ser útil antes o después del ejercicio, pero cuidado con el exceso diario.",
            under: "Algo bajo. Puede afectar tu rendimiento en sesiones largas.",
        },
        red: Signed {
            over: "Exceso grave. Riesgo de fatiga post-ingesta y acumulación de grasa.",
            under: "Muy bajo. Revisa tu energía si haces ejercicio intenso.",
        },
    },
};

const FIBER: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Perfecto. Tienes un consumo adecuado de fibra para mantener la salud digestiva.",
            under: "Buen nivel. Promueve la regularidad y bienestar intestinal.",
        },
        amber: Signed {
            over: "Estás algo por encima. Controla la sensación de pesadez si aparece.",
            under: "Estás algo por debajo. Vigila si aparece estreñimiento o ansiedad por comida.",
        },
        red: Signed {
            over: "Exceso de fibra. Posibles molestias gastrointestinales.",
            under: "Muy bajo. Afecta negativamente la salud digestiva y el metabolismo.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Excelente. Buena cantidad de fibra para controlar el apetito y mejorar la digestión mientras pierdes grasa.",
            under: "Rango saludable. Tienes una ingesta suficiente para favorecer la saciedad sin excesos.",
        },
        amber: Signed {
            over: "Estás algo por encima. Podrías experimentar digestión lenta o gases si se mantiene.",
            under: "Estás algo por debajo. Esto puede dificultar el control del hambre.",
        },
        red: Signed {
            over: "Exceso de fibra. Riesgo de malestar intestinal, hinchazón o baja absorción de nutrientes.",
            under: "Déficit importante. Puede dificultar la digestión y el control de peso.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Ingesta adecuada. Ayuda a regular la digestión y controlar el apetito durante tu fase de ganancia.",
            under: "Buen equilibrio. No comprometes la digestión ni la energía.",
        },
        amber: Signed {
            over: "Algo elevada. Vigila si notas gases o digestión pesada.",
            under: "Estás algo por debajo. Puede afectar tu salud digestiva.",
        },
        red: Signed {
            over: "Fibra excesiva. Podría interferir en la absorción de calorías y nutrientes clave.",
            under: "Muy baja. Riesgo de estreñimiento o falta de saciedad.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Buen aporte de fibra. Ayuda a regular el apetito y mejorar composición corporal.",
            under: "Ingesta equilibrada. Favorece recomposición sin molestias digestivas.",
        },
        amber: Signed {
            over: "Estás algo por encima. Bien si no hay molestias, pero vigila síntomas intestinales.",
            under: "Estás algo por debajo. Puede dificultar el control de la alimentación.",
        },
        red: Signed {
            over: "Demasiada fibra. Puede afectar tu rendimiento y absorción de nutrientes.",
            under: "Muy baja. Riesgo de hambre continua y salud digestiva deficiente.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Perfecto. Buen soporte digestivo sin afectar la energía.",
            under: "Bien. Nivel estable para mantener rendimiento y digestión.",
        },
        amber: Signed {
            over: "Algo por encima. Si sientes pesadez o hinchazón, reduce un poco.",
            under: "Algo bajo. Vigila si se presentan problemas digestivos.",
        },
        red: Signed {
            over: "Exceso grave. Puede afectar tu comodidad al entrenar.",
            under: "Muy bajo. Impacta negativamente en tu salud digestiva y recuperación.",
        },
    },
};

const IRON: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Buen equilibrio. Apoya tu salud general y niveles de energía.",
            under: "Nivel adecuado para mantener la función inmune y metabolismo estable.",
        },
        amber: Signed {
            over: "Estás algo por encima. Revisa tu fuente de hierro si usas suplementos.",
            under: "Estás algo por debajo. Aumenta alimentos ricos en hierro como carnes, legumbres o vegetales verdes.",
        },
        red: Signed {
            over: "Exceso alto. Consulta con un profesional si es habitual.",
            under: "Muy bajo. Riesgo de debilidad, mareos o dificultad para concentrarte.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Tienes una ingesta adecuada de hierro. Esto ayuda a mantener tus niveles de energía y a prevenir la fatiga durante el déficit calórico.",
            under: "Buen nivel de hierro. Ayuda a prevenir anemia y te permite sostener el rendimiento mientras bajas de peso.",
        },
        amber: Signed {
            over: "Estás algo por encima. No suele ser problemático, pero evita suplementos sin control médico.",
            under: "Estás algo por debajo. Vigila si notas fatiga, palidez o dificultad para concentrarte.",
        },
        red: Signed {
            over: "Ingesta muy alta. El exceso de hierro puede ser tóxico si se prolonga. Consulta con un profesional si tomas suplementos.",
            under: "Déficit importante. Riesgo de anemia, fatiga crónica y menor rendimiento físico.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Ingesta adecuada. Favorece el transporte de oxígeno y tu capacidad para entrenar intensamente.",
            under: "Buen nivel para apoyar tu metabolismo y rendimiento físico.",
        },
        amber: Signed {
            over: "Algo elevado. Precaución si consumes suplementos, no es necesario sobrepasar.",
            under: "Estás algo bajo. Vigila si sientes agotamiento o falta de fuerza.",
        },
        red: Signed {
            over: "Demasiado hierro. Puede generar malestar digestivo o daño hepático a largo plazo.",
            under: "Muy bajo. Puede comprometer tu progreso y recuperación muscular.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Buen nivel. El hierro favorece el rendimiento y recuperación muscular.",
            under: "Nivel adecuado para apoyar tu recomposición corporal sin fatiga.",
        },
        amber: Signed {
            over: "Ligeramente elevado. Si no usas suplementos, probablemente sin riesgo.",
            under: "Algo bajo. Puedes sentir menos energía en tus entrenamientos.",
        },
        red: Signed {
            over: "Muy por encima. Posible riesgo hepático a largo plazo si se mantiene.",
            under: "Déficit importante. Dificulta la oxigenación muscular y el rendimiento.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Excelente. Buen nivel para sostener entrenamientos intensos y recuperación.",
            under: "Buen equilibrio de hierro. Favorece el rendimiento aeróbico y concentración.",
        },
        amber: Signed {
            over: "Algo alto. Si tomas suplementos, revisa la dosis con un profesional.",
            under: "Algo bajo. Puedes notar una leve reducción de resistencia o fatiga temprana.",
        },
        red: Signed {
            over: "Exceso significativo. Riesgo de toxicidad si se mantiene. Precaución.",
            under: "Muy bajo. Afecta directamente a tu rendimiento y recuperación.",
        },
    },
};

const CALCIUM: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Nivel adecuado. Apoya huesos fuertes y función muscular.",
            under: "Buena ingesta para mantener equilibrio mineral.",
        },
        amber: Signed {
            over: "Algo por encima. Evita suplementos innecesarios si ya comes bien.",
            under: "Estás algo por debajo. Revisa tu dieta para asegurar cobertura.",
        },
        red: Signed {
            over: "Exceso importante. Riesgo de toxicidad si se sostiene.",
            under: "Déficit significativo. Puede aumentar riesgo de osteoporosis a largo plazo.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Ingesta óptima. Ayuda a mantener tu salud ósea incluso durante el déficit calórico.",
            under: "Buen nivel. Es suficiente para cubrir tus necesidades sin excesos.",
        },
        amber: Signed {
            over: "Estás algo por encima. Si proviene de suplementos, revisa la dosis con un profesional.",
            under: "Estás algo por debajo. Aumenta lácteos, vegetales verdes o bebidas enriquecidas.",
        },
        red: Signed {
            over: "Exceso alto. Riesgo de cálculos renales o interferencias con otros nutrientes.",
            under: "Déficit importante. Riesgo de pérdida de masa ósea si se mantiene.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Buen nivel. Soporta el crecimiento muscular y la contracción adecuada durante el entrenamiento.",
            under: "Ingesta suficiente para sostener metabolismo y salud ósea.",
        },
        amber: Signed {
            over: "Algo elevado. Revisa si tomas suplementos adicionales sin indicación.",
            under: "Estás algo bajo. Aumenta fuentes como yogur, queso o vegetales verdes.",
        },
        red: Signed {
            over: "Muy por encima del rango. Posible riesgo renal si se mantiene.",
            under: "Muy bajo. Puede comprometer la recuperación y la fortaleza ósea.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Ingesta ideal. Ayuda a sostener huesos y contracción muscular mientras mejoras tu composición corporal.",
            under: "Buen nivel de calcio. Apoya tu salud ósea sin excesos.",
        },
        amber: Signed {
            over: "Ligeramente alto. Solo relevante si estás suplementando.",
            under: "Algo bajo. Aumenta alimentos ricos en calcio para evitar pérdida ósea.",
        },
        red: Signed {
            over: "Muy elevado. No aporta beneficios adicionales y puede generar molestias renales.",
            under: "Muy bajo. Riesgo de debilidad ósea o calambres frecuentes.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Óptimo. Mantiene tus músculos y sistema nervioso funcionando correctamente.",
            under: "Nivel saludable para apoyar rendimiento sostenido.",
        },
        amber: Signed {
            over: "Estás algo por encima. Evita el uso prolongado de suplementos sin control.",
            under: "Ligeramente bajo. Puede afectar la contracción muscular y aumentar riesgo de calambres.",
        },
        red: Signed {
            over: "Exceso elevado. Riesgo potencial para la salud renal.",
            under: "Muy bajo. Afecta rendimiento físico, concentración y salud ósea.",
        },
    },
};

const SODIUM: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Buen nivel. Apoya el balance hídrico y la presión arterial normal.",
            under: "Ingesta adecuada para mantener el equilibrio electrolítico.",
        },
        amber: Signed {
            over: "Estás algo por encima. Revisa el consumo de snacks salados o embutidos.",
            under: "Estás algo bajo. No suele ser grave, pero atención si sientes mareos.",
        },
        red: Signed {
            over: "Exceso importante. Riesgo de hipertensión o retención si se mantiene.",
            under: "Déficit importante. Consulta si notas síntomas persistentes.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Tu nivel de sodio está en rango adecuado. Es clave para evitar retención de líquidos durante la pérdida de peso.",
            under: "Ingesta equilibrada. Te ayuda a mantener el balance hídrico sin excesos.",
        },
        amber: Signed {
            over: "Estás algo por encima. Revisa si estás consumiendo alimentos procesados o muy salados.",
            under: "Estás algo bajo. Si sudas mucho o haces ejercicio, asegúrate de reponer electrolitos.",
        },
        red: Signed {
            over: "Ingesta muy alta. Riesgo de retención, hinchazón y presión arterial elevada.",
            under: "Muy bajo. Posible deshidratación o desequilibrio si haces mucho ejercicio.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Nivel saludable. Soporta la hidratación adecuada durante el entrenamiento.",
            under: "Ingesta suficiente para mantener equilibrio electrolítico.",
        },
        amber: Signed {
            over: "Estás algo elevado. Modera el consumo de sal añadida.",
            under: "Estás algo por debajo. Considera aumentar ligeramente si sudas mucho.",
        },
        red: Signed {
            over: "Muy alto. Riesgo de sobrecarga cardiovascular o fatiga.",
            under: "Muy bajo. Puede generar mareos, calambres o debilidad en el entrenamiento.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Buen rango. Te ayuda a evitar hinchazón y mantener el equilibrio de líquidos.",
            under: "Nivel correcto para sostener el metabolismo sin interferencias.",
        },
        amber: Signed {
            over: "Algo alto. Vigila si aparece retención o peso fluctuante.",
            under: "Algo bajo. Asegura una hidratación completa, sobre todo si entrenas.",
        },
        red: Signed {
            over: "Muy alto. Puede dificultar la definición y generar presión elevada.",
            under: "Muy bajo. Riesgo de deshidratación o calambres musculares.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Óptimo. Apoya el rendimiento y recuperación post-ejercicio.",
            under: "Buen nivel de sodio para sostener tu esfuerzo físico.",
        },
        amber: Signed {
            over: "Algo por encima. Si no haces actividad intensa, modera la sal.",
            under: "Algo bajo. Revisa tu hidratación y repones electrolitos tras entrenar.",
        },
        red: Signed {
            over: "Exceso elevado. Puede impactar tu salud cardiovascular a largo plazo.",
            under: "Muy bajo. Desbalance hídrico que afecta el rendimiento.",
        },
    },
};

const POTASSIUM: ByGoal = ByGoal {
    maintain: ByTier {
        green: Signed {
            over: "Ingesta óptima. Contribuye al buen funcionamiento del corazón y músculos.",
            under: "Buen nivel de potasio para mantener tu equilibrio general.",
        },
        amber: Signed {
            over: "Estás algo por encima. Cuidado con suplementos o bebidas deportivas.",
            under: "Estás algo bajo. Aumenta alimentos frescos como kiwi, plátano o espinacas.",
        },
        red: Signed {
            over: "Exceso elevado. Consulta si tienes problemas renales o cardíacos.",
            under: "Déficit importante. Puede afectar tus nervios y musculatura.",
        },
    },
    lose: ByTier {
        green: Signed {
            over: "Ingesta adecuada. Te ayuda a mantener equilibrio hídrico y evitar la retención causada por el sodio.",
            under: "Nivel correcto. Soporta la función muscular y nerviosa durante tu pérdida de peso.",
        },
        amber: Signed {
            over: "Estás algo elevado. Revisa si tomas suplementos sin necesidad.",
            under: "Estás algo por debajo. Aumenta frutas como plátano o aguacate.",
        },
        red: Signed {
            over: "Nivel muy alto. Si no tienes indicación médica, evita suplementos excesivos.",
            under: "Muy bajo. Riesgo de fatiga, calambres y alteraciones cardíacas.",
        },
    },
    gain: ByTier {
        green: Signed {
            over: "Buen aporte de potasio. Mejora la contracción muscular y recuperación.",
            under: "Nivel saludable para apoyar tu entrenamiento y evitar calambres.",
        },
        amber: Signed {
            over: "Algo elevado. Puede ser útil si entrenas fuerte, pero sin abusos.",
            under: "Algo bajo. Aumenta frutas y verduras para mejorar tu recuperación.",
        },
        red: Signed {
            over: "Muy alto. Puede causar molestias si se combina con suplementos innecesarios.",
            under: "Muy bajo. Riesgo de fatiga, mareos o debilidad muscular.",
        },
    },
    recomposition: ByTier {
        green: Signed {
            over: "Nivel ideal. Soporta el metabolismo activo y la contracción muscular.",
            under: "Buen equilibrio. Ayuda a evitar retención y mejora el entorno metabólico.",
        },
        amber: Signed {
            over: "Ligeramente alto. Si estás suplementando, revisa la dosis.",
            under: "Algo bajo. Aumenta frutas y hortalizas para mejorar la recomposición.",
        },
        red: Signed {
            over: "Muy alto. Evita el exceso si no tienes indicación profesional.",
            under: "Muy bajo. Puede reducir tu rendimiento y dificultar tus resultados.",
        },
    },
    performance: ByTier {
        green: Signed {
            over: "Buen nivel. Apoya la contracción muscular y previene calambres.",
            under: "Nivel correcto para sostener la intensidad de tus entrenamientos.",
        },
        amber: Signed {
            over: "Algo alto. Puede ser útil si entrenas con mucha sudoración.",
            under: "Algo bajo. Revisa tu hidratación y dieta si notas calambres.",
        },
        red: Signed {
            over: "Exceso importante. Puede generar desequilibrios si no está controlado.",
            under: "Muy bajo. Afecta directamente fuerza, energía y recuperación.",
        },
    },
};
