use crate::aa::{AAFramework, Argument};
use crate::utils::LabelType;

/// Computes the grounded extension of an AF.
///
/// The extension is the least fixpoint of the function accepting every argument whose attackers are all defeated by accepted arguments.
/// Each defeat is considered at most twice, making the computation linear in the size of the framework.
pub(crate) fn grounded_extension<T>(af: &AAFramework<T>) -> Vec<&Argument<T>>
where
    T: LabelType,
{
    let mut ext = vec![];
    let mut n_processed_args = 0;
    let mut defeated_args = vec![false; af.n_arguments()];
    let mut n_undefeated_attackers = (0..af.n_arguments())
        .map(|i| {
            let n = af.n_attackers_of_id(i);
            if n == 0 {
                ext.push(af.argument_set().get_argument_by_id(i))
            }
            n
        })
        .collect::<Vec<usize>>();
    while n_processed_args < ext.len() {
        let id = ext[n_processed_args].id();
        for defeated in af.attacked_ids(id) {
            if defeated_args[defeated] {
                continue;
            }
            defeated_args[defeated] = true;
            for attacked in af.attacked_ids(defeated) {
                n_undefeated_attackers[attacked] -= 1;
                if n_undefeated_attackers[attacked] == 0 && !defeated_args[attacked] {
                    ext.push(af.argument_set().get_argument_by_id(attacked))
                }
            }
        }
        n_processed_args += 1;
    }
    ext
}
