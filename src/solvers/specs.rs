use crate::{aa::Argument, utils::LabelType};
use anyhow::Result;

/// A trait for solvers able to enumerate the extensions of a framework under a given semantics.
///
/// Extensions are returned in a canonical form: the arguments of each extension are sorted by id,
/// and the list of extensions is sorted and free of duplicates.
/// Two calls on the same framework thus return equal values.
pub trait ExtensionEnumerator<'a, T>
where
    T: LabelType,
{
    /// Enumerates all the extensions.
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>>;

    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    /// The default implementation returns the first extension in canonical order.
    fn compute_one_extension(&mut self) -> Result<Option<Vec<&'a Argument<T>>>> {
        Ok(self.enumerate_extensions()?.into_iter().next())
    }
}

/// A trait for solvers able to check the credulous acceptance of an argument.
///
/// It is implemented by every [`ExtensionEnumerator`].
pub trait CredulousAcceptanceComputer<'a, T>
where
    T: LabelType + 'a,
{
    /// Checks the credulous acceptance of an argument.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        self.is_credulously_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&'a Argument<T>>>)>;
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
///
/// It is implemented by every [`ExtensionEnumerator`].
pub trait SkepticalAcceptanceComputer<'a, T>
where
    T: LabelType + 'a,
{
    /// Checks the skeptical acceptance of an argument.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        self.is_skeptically_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&'a Argument<T>>>)>;
}

impl<'a, T, S> CredulousAcceptanceComputer<'a, T> for S
where
    T: LabelType + 'a,
    S: ExtensionEnumerator<'a, T> + ?Sized,
{
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&'a Argument<T>>>)> {
        let certificate = self
            .enumerate_extensions()?
            .into_iter()
            .find(|ext| ext.iter().any(|a| a.id() == arg.id()));
        Ok((certificate.is_some(), certificate))
    }
}

impl<'a, T, S> SkepticalAcceptanceComputer<'a, T> for S
where
    T: LabelType + 'a,
    S: ExtensionEnumerator<'a, T> + ?Sized,
{
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&'a Argument<T>>>)> {
        let certificate = self
            .enumerate_extensions()?
            .into_iter()
            .find(|ext| ext.iter().all(|a| a.id() != arg.id()));
        Ok((certificate.is_none(), certificate))
    }
}
