/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Legal abbreviation tables.
//!
//! Each entry is a `(pattern, abbreviation)` pair. Patterns are regular
//! expression fragments; they are compiled as whole-word, case-insensitive
//! matches and applied in declaration order, so a longer phrase must precede
//! any shorter phrase it contains.

/// Case names and institutional authors.
pub(crate) const CASE_NAMES: &[(&str, &str)] = &[
    (r"Academ(ic|y)", "Acad."),
    (r"Account(ant|ing|ancy)", "Acct."),
    (r"Administrat(ive|ion)", "Admin."),
    (r"Administrator", "Adm’r"),
    (r"Administratrix", "Adm’x"),
    (r"Advertising", "Advert."),
    (r"Advoca(te|cy)", "Advoc."),
    (r"Affair", "Aff."),
    (r"Africa(?:n)?", "Afr."),
    (r"Agricultur(e|al)", "Agric."),
    (r"Alliance", "All."),
    (r"Alternative", "Alt."),
    (r"America(?:n)?", "Am."),
    (r"Ancestry", "Anc."),
    (r"and", "&"),
    (r"Annual", "Ann."),
    (r"Appellate", "App."),
    (r"Arbitrat(ion|or)", "Arb."),
    (r"Artificial Intelligence", "A.I."),
    (r"Associate", "Assoc."),
    (r"Association", "Ass'n"),
    (r"Atlantic", "Atl."),
    (r"Attorney", "Att'y"),
    (r"Authority", "Auth."),
    (r"Automo(bile|tive)", "Auto."),
    (r"Avenue", "Ave."),
    (r"Bankruptcy", "Bankr."),
    (r"Behavior(?:al)?", "Behav."),
    (r"Board", "Bd."),
    (r"British", "Brit."),
    (r"Broadcast(er|ing)", "Broad."),
    (r"Building", "Bldg."),
    (r"Bulletin", "Bull."),
    (r"Business(?:es)?", "Bus."),
    (r"Capital", "Cap."),
    (r"Casualt(y|ies)", "Cas."),
    (r"Catholic", "Cath."),
    (r"Cent(er|re)", "Ctr."),
    (r"Central", "Cent."),
    (r"Chemical", "Chem."),
    (r"Children", "Child."),
    (r"Chronicle", "Chron."),
    (r"Circuit", "Cir."),
    (r"Civil Libert(y|ies)", "C.L."),
    (r"Civil Rights", "C.R."),
    (r"Civil", "Civ."),
    (r"Coalition", "Coal."),
    (r"College", "Coll."),
    (r"Commentary", "Comment."),
    (r"Commerc(e|ial)", "Com."),
    (r"Commission", "Comm'n"),
    (r"Commissioner", "Comm'r"),
    (r"Committee", "Comm."),
    (r"Communication", "Commc'n"),
    (r"Community", "Cmty."),
    (r"Company", "Co."),
    (r"Comparative", "Compar."),
    (r"Compensation", "Comp."),
    (r"Computer", "Comput."),
    (r"Condominium", "Condo."),
    (r"Conference", "Conf."),
    (r"Congress(?:ional)?", "Cong."),
    (r"Consolidated", "Consol."),
    (r"Constitution(?:al)?", "Const."),
    (r"Construction", "Constr."),
    (r"Contemporary", "Contemp."),
    (r"Continental", "Cont'l"),
    (r"Contract", "Cont."),
    (r"Conveyance(?:r)?", "Conv."),
    (r"Cooperat(ion|ive)", "Coop."),
    (r"Corporat(e|ion)", "Corp."),
    (r"Correction(s|al)", "Corr."),
    (r"Cosmetic", "Cosm."),
    (r"Counsel(or|ors|or's)", "Couns."),
    (r"County", "Cnty."),
    (r"Supreme Court", "Sup. Ct."),
    (r"Court", "Ct."),
    (r"Criminal", "Crim."),
    (r"Defen(d|der|se)", "Def."),
    (r"Delinquen(t|cy)", "Delinq."),
    (r"Department", "Dep't"),
    (r"Detention", "Det."),
    (r"Develop(er|ment)", "Dev."),
    (r"Digest", "Dig."),
    (r"Digital", "Digit."),
    (r"Diplomacy", "Dipl."),
    (r"Director", "Dir."),
    (r"Discount", "Disc."),
    (r"Dispute", "Disp."),
    (r"Distribut(or|ing|ion)", "Distrib."),
    (r"District", "Dist."),
    (r"Division", "Div."),
    (r"Doctor", "Dr."),
    (r"East(?:ern)?", "E."),
    (r"Econom(ic|ical|ics|y)", "Econ."),
    (r"Editor(?:ial)?", "Ed."),
    (r"Education(?:al)?", "Educ."),
    (r"Electr(ic|ical|icity|onic)", "Elec."),
    (r"Employ(ee|er|ment)", "Emp."),
    (r"Enforcement", "Enf't"),
    (r"Engineer", "Eng'r"),
    (r"Engineering", "Eng'g"),
    (r"English", "Eng."),
    (r"Enterprise", "Enter."),
    (r"Entertainment", "Ent."),
    (r"Environment(?:al)?", "Env't"),
    (r"Equality", "Equal."),
    (r"Equipment", "Equip."),
    (r"Estate", "Est."),
    (r"Europe(?:an)?", "Eur."),
    (r"Examiner", "Exam'r"),
    (r"Exchange", "Exch."),
    (r"Executive", "Exec."),
    (r"Executor", "Ex’r"),
    (r"Executrix", "Ex’x"),
    (r"Explorat(ion|ory)", "Expl."),
    (r"Export(er|ation)", "Exp."),
    (r"Faculty", "Fac."),
    (r"Family", "Fam."),
    (r"Federal", "Fed."),
    (r"Federation", "Fed'n"),
    (r"Fidelity", "Fid."),
    (r"Financ(e|ial|ing)", "Fin."),
    (r"Fortnightly", "Fort."),
    (r"Forum", "F."),
    (r"Foundation", "Found."),
    (r"General", "Gen."),
    (r"Global", "Glob."),
    (r"Government", "Gov't"),
    (r"Group", "Grp."),
    (r"Guarant(y|or)", "Guar."),
    (r"Hispanic", "Hisp."),
    (r"Histor(ical|y)", "Hist."),
    (r"Hospital(?:ity)?", "Hosp."),
    (r"Housing", "Hous."),
    (r"Human", "Hum."),
    (r"Humanity", "Human."),
    (r"Immigration", "Immigr."),
    (r"Import(er|ation)", "Imp."),
    (r"Incorporated", "Inc."),
    (r"Indemnity", "Indem."),
    (r"Independen(ce|t)", "Indep."),
    (r"Industr(y|ial|ies)", "Indus."),
    (r"Inequality", "Ineq."),
    (r"Information", "Info."),
    (r"Injury", "Inj."),
    (r"Institut(e|ion)", "Inst."),
    (r"Insurance", "Ins."),
    (r"Intellectual", "Intell."),
    (r"Intelligence", "Intel."),
    (r"Interdisciplinary", "Interdisc."),
    (r"Interest", "Int."),
    (r"International", "Int'l"),
    (r"Invest(ment|or)", "Inv."),
    (r"Journal(?:s)?", "J."),
    (r"Judicial", "Jud."),
    (r"Juridical", "Jurid."),
    (r"Jurisprudence", "Juris."),
    (r"Justice", "Just."),
    (r"Juvenile", "Juv."),
    (r"Labor", "Lab."),
    (r"Laboratory", "Lab'y"),
    (r"Law(?:s)?", "L."),
    (r"Lawyer", "Law."),
    (r"Legislat(ion|ive)", "Legis."),
    (r"Liability", "Liab."),
    (r"Librar(y|ian)", "Libr."),
    (r"Limited", "Ltd."),
    (r"Litigation", "Litig."),
    (r"Local", "Loc."),
    (r"Machine(?:ry)?", "Mach."),
    (r"Magazine", "Mag."),
    (r"Maintenance", "Maint."),
    (r"Management", "Mgmt."),
    (r"Manufacturer", "Mfr."),
    (r"Manufacturing", "Mfg."),
    (r"Maritime", "Mar."),
    (r"Market", "Mkt."),
    (r"Marketing", "Mktg."),
    (r"Matrimonial", "Matrim."),
    (r"Mechanic(?:al)?", "Mech."),
    (r"Medic(al|inal|ine)", "Med."),
    (r"Memorial", "Mem'l"),
    (r"Merchan(t|dise|dising)", "Merch."),
    (r"Metropolitan", "Metro."),
    (r"Military", "Mil."),
    (r"Mineral", "Min."),
    (r"Modern", "Mod."),
    (r"Mortgage", "Mortg."),
    (r"Municipal(?:ity)?", "Mun."),
    (r"Mutual", "Mut."),
    (r"National", "Nat'l"),
    (r"Nationality", "Nat'y"),
    (r"Natural", "Nat."),
    (r"Negligence", "Negl."),
    (r"Negotiat(ion|or)", "Negot."),
    (r"Newsletter", "Newsl."),
    (r"North(?:ern)?", "N."),
    (r"Northeast(?:ern)?", "Ne."),
    (r"Northwest(?:ern)?", "Nw."),
    (r"Number", "No."),
    (r"Offic(e|ial)", "Off."),
    (r"Opinion", "Op."),
    (r"Order", "Ord."),
    (r"Organiz(ation|ing)", "Org."),
    (r"Pacific", "Pac."),
    (r"Parish", "Par."),
    (r"Partnership", "P'ship"),
    (r"Patent", "Pat."),
    (r"Person(al|nel)", "Pers."),
    (r"Perspective", "Persp."),
    (r"Pharmaceutic(?:al)?", "Pharm."),
    (r"Philosoph(ical|y)", "Phil."),
    (r"Planning", "Plan."),
    (r"Policy", "Pol'y"),
    (r"Politic(al|s)", "Pol."),
    (r"Practi(cal|ce|titioner)", "Prac."),
    (r"Preserv(e|ation)", "Pres."),
    (r"Priva(cy|te)", "Priv."),
    (r"Probat(e|ion)", "Prob."),
    (r"Problems", "Probs."),
    (r"Proce(edings|dure)", "Proc."),
    (r"Product(?:ion)?", "Prod."),
    (r"Profession(?:al)?", "Pro."),
    (r"Property", "Prop."),
    (r"Protection", "Prot."),
    (r"Psycholog(ical|ist|y)", "Psych."),
    (r"Public", "Pub."),
    (r"Publication", "Publ'n"),
    (r"Publishing", "Publ'g"),
    (r"Quarterly", "Q."),
    (r"Railroad", "R.R."),
    (r"Railway", "Ry."),
    (r"Record", "Rec."),
    (r"Referee", "Ref."),
    (r"Refin(ing|ement)", "Refin."),
    (r"Regional", "Reg'l"),
    (r"Register", "Reg."),
    (r"Regulat(ion|or|ory)", "Regul."),
    (r"Rehabilitat(ion|ive)", "Rehab."),
    (r"Relation", "Rel."),
    (r"Report(?:er)?", "Rep."),
    (r"Reproduct(ion|ive)", "Reprod."),
    (r"Research", "Rsch."),
    (r"Reserv(ation|e)", "Rsrv."),
    (r"Resolution", "Resol."),
    (r"Resource(?:s)?", "Res."),
    (r"Responsibility", "Resp."),
    (r"Restaurant", "Rest."),
    (r"Retirement", "Ret."),
    (r"Review|Revista", "Rev."),
    (r"Rights", "Rts."),
    (r"Road", "Rd."),
    (r"Savings", "Sav."),
    (r"School", "Sch."),
    (r"Scien(ce|tific)", "Sci."),
    (r"Scottish", "Scot."),
    (r"Secretary", "Sec'y"),
    (r"Securit(y|ies)", "Sec."),
    (r"Sentencing", "Sent'g"),
    (r"Service", "Serv."),
    (r"Shareholder|Stockholder", "S'holder"),
    (r"Social", "Soc."),
    (r"Society", "Soc'y"),
    (r"Sociolog(ical|y)", "Socio."),
    (r"Solicitor", "Solic."),
    (r"Solution", "Sol."),
    (r"South(?:ern)?", "S."),
    (r"Southeast(?:ern)?", "Se."),
    (r"Southwest(?:ern)?", "Sw."),
    (r"Statistic(s|al)", "Stat."),
    (r"Steamship(?:s)?", "S.S."),
    (r"Street", "St."),
    (r"Studies", "Stud."),
    (r"Subcommittee", "Subcomm."),
    (r"Surety", "Sur."),
    (r"Survey", "Surv."),
    (r"Symposium", "Symp."),
    (r"System(?:s)?", "Sys."),
    (r"Taxation", "Tax'n"),
    (r"Teacher", "Tchr."),
    (r"Techn(ical|ique|ology|ological)", "Tech."),
    (r"Telecommunication", "Telecomm."),
    (r"Tele(phone|graph)", "Tel."),
    (r"Temporary", "Temp."),
    (r"Township", "Twp."),
    (r"Transcontinental", "Transcon."),
    (r"Transnational", "Transnat'l"),
    (r"Transport(?:ation)?", "Transp."),
    (r"Tribune", "Trib."),
    (r"Trust(?:ee)?", "Tr."),
    (r"Turnpike", "Tpk."),
    (r"Uniform", "Unif."),
    (r"United States", "U.S."),
    (r"University", "Univ."),
    (r"Urban", "Urb."),
    (r"Utility", "Util."),
    (r"Village", "Vill."),
    (r"Week", "Wk."),
    (r"Weekly", "Wkly."),
    (r"West(?:ern)?", "W."),
    (r"Year(?: )?book", "Y.B."),
];
/// Geographical terms.
pub(crate) const GEOGRAPHY: &[(&str, &str)] = &[
    // U.S. states
    (r"Alabama", "Ala."),
    (r"Alaska", "Alaska"),
    (r"Arizona", "Ariz."),
    (r"Arkansas", "Ark."),
    (r"California", "Cal."),
    (r"Colorado", "Colo."),
    (r"Connecticut", "Conn."),
    (r"Delaware", "Del."),
    (r"Florida", "Fla."),
    (r"Georgia", "Ga."),
    (r"Hawaii", "Haw."),
    (r"Idaho", "Idaho"),
    (r"Illinois", "Ill."),
    (r"Indiana", "Ind."),
    (r"Iowa", "Iowa"),
    (r"Kansas", "Kan."),
    (r"Kentucky", "Ky."),
    (r"Louisiana", "La."),
    (r"Maine", "Me."),
    (r"Maryland", "Md."),
    (r"Massachusetts", "Mass."),
    (r"Michigan", "Mich."),
    (r"Minnesota", "Minn."),
    (r"Mississippi", "Miss."),
    (r"Missouri", "Mo."),
    (r"Montana", "Mont."),
    (r"Nebraska", "Neb."),
    (r"Nevada", "Nev."),
    (r"New Hampshire", "N.H."),
    (r"New Jersey", "N.J."),
    (r"New Mexico", "N.M."),
    (r"New York", "N.Y."),
    (r"North Carolina", "N.C."),
    (r"North Dakota", "N.D."),
    (r"Ohio", "Ohio"),
    (r"Oklahoma", "Okla."),
    (r"Oregon", "Or."),
    (r"Pennsylvania", "Pa."),
    (r"Rhode Island", "R.I."),
    (r"South Carolina", "S.C."),
    (r"South Dakota", "S.D."),
    (r"Tennessee", "Tenn."),
    (r"Texas", "Tex."),
    (r"Utah", "Utah"),
    (r"Vermont", "Vt."),
    (r"West Virginia", "W. Va."),
    (r"Virginia", "Va."),
    (r"Washington", "Wash."),
    (r"Wisconsin", "Wis."),
    (r"Wyoming", "Wyo."),
    // U.S. cities
    (r"Baltimore", "Balt."),
    (r"Boston", "Bos."),
    (r"Chicago", "Chi."),
    (r"Dallas", "Dall."),
    (r"District of Columbia", "D.C."),
    (r"Houston", "Hous."),
    (r"Los Angeles", "L.A."),
    (r"Miami", "Mia."),
    (r"New York", "N.Y.C."),
    (r"Philadelphia", "Phila."),
    (r"Phoenix", "Phx."),
    (r"San Francisco", "S.F."),
    // U.S. territories
    (r"American Samoa", "Am. Sam."),
    (r"Guam", "Guam"),
    (r"Northern Mariana Islands", "N. Mar. I."),
    (r"Puerto Rico", "P.R."),
    (r"Virgin Islands, British", "Virgin Is."),
    (r"Virgin Islands", "V.I."),
    // Australian states and territories
    (r"Australian Capital Territory", "Austl. Cap. Terr."),
    (r"New South Wales", "N.S.W."),
    (r"Northern Territory", "N. Terr."),
    (r"Queensland", "Queensl."),
    (r"South Australia", "S. Austl."),
    (r"Tasmania", "Tas."),
    (r"Victoria", "Vict."),
    (r"Western Australia", "W. Austl."),
    // Canadian provinces and territories
    (r"Alberta", "Alta."),
    (r"British Columbia", "B.C."),
    (r"Manitoba", "Man."),
    (r"New Brunswick", "N.B."),
    (r"Newfoundland & Labrador", "Nfld."),
    (r"Northwest Territories", "N.W.T."),
    (r"Nova Scotia", "N.S."),
    (r"Nunavut", "Nun."),
    (r"Ontario", "Ont."),
    (r"Prince Edward Island", "P.E.I."),
    (r"Québec", "Que."),
    (r"Saskatchewan", "Sask."),
    (r"Yukon", "Yukon"),
    // Countries and regions
    (r"Afghanistan", "Afg."),
    (r"South Africa", "S. Afr."),
    (r"Africa", "Afr."),
    (r"Albania", "Alb."),
    (r"Algeria", "Alg."),
    (r"Andorra", "Andorra"),
    (r"Angola", "Angl."),
    (r"Anguilla", "Anguilla"),
    (r"Antarctica", "Antarctica"),
    (r"Antigua & Barbuda", "Ant. & Barb."),
    (r"Argentina", "Arg."),
    (r"Armenia", "Arm."),
    (r"Asia", "Asia"),
    (r"Australia", "Austl."),
    (r"Austria", "Austria"),
    (r"Azerbaijan", "Azer."),
    (r"Bahamas", "Bah."),
    (r"Bahrain", "Bahr."),
    (r"Bangladesh", "Bangl."),
    (r"Barbados", "Barb."),
    (r"Belarus", "Belr."),
    (r"Belgium", "Belg."),
    (r"Belize", "Belize"),
    (r"Benin", "Benin"),
    (r"Bermuda", "Berm."),
    (r"Bhutan", "Bhutan"),
    (r"Bolivia", "Bol."),
    (r"Bosnia & Herzegovina", "Bosn. & Herz."),
    (r"Botswana", "Bots."),
    (r"Brazil", "Braz."),
    (r"Brunei", "Brunei"),
    (r"Bulgaria", "Bulg."),
    (r"Burkina Faso", "Burk. Faso"),
    (r"Burundi", "Burundi"),
    (r"Cambodia", "Cambodia"),
    (r"Cameroon", "Cameroon"),
    (r"Canada", "Can."),
    (r"Cape Verde", "Cape Verde"),
    (r"Cayman Islands", "Cayman Is."),
    (r"Central African Republic", "Cent. Afr. Rep."),
    (r"Chad", "Chad"),
    (r"Chile", "Chile"),
    (r"China, People’s Republic of", "China"),
    (r"Colombia", "Colom."),
    (r"Comoros", "Comoros"),
    (r"Congo, Democratic Republic of the", "Dem. Rep. Congo"),
    (r"Congo, Republic of the", "Congo"),
    (r"Costa Rica", "Costa Rica"),
    (r"Côte d’Ivoire", "Côte d’Ivoire"),
    (r"Croatia", "Croat."),
    (r"Cuba", "Cuba"),
    (r"Cyprus", "Cyprus"),
    (r"Czech Republic", "Czech"),
    (r"Denmark", "Den."),
    (r"Djibouti", "Djib."),
    (r"Dominica", "Dominica"),
    (r"Dominican Republic", "Dom. Rep."),
    (r"Ecuador", "Ecuador"),
    (r"Egypt", "Egypt"),
    (r"El Salvador", "El Sal."),
    (r"England", "Eng."),
    (r"Equatorial Guinea", "Eq. Guinea"),
    (r"Eritrea", "Eri."),
    (r"Estonia", "Est."),
    (r"Ethiopia", "Eth."),
    (r"Europe", "Eur."),
    (r"Falkland Islands", "Falkland Is."),
    (r"Fiji", "Fiji"),
    (r"Finland", "Fin."),
    (r"France", "Fr."),
    (r"Gabon", "Gabon"),
    (r"Gambia", "Gam."),
    (r"Georgia", "Geor."),
    (r"Germany", "Ger."),
    (r"Ghana", "Ghana"),
    (r"Gibraltar", "Gib."),
    (r"Great Britain", "Gr. Brit."),
    (r"Greece", "Greece"),
    (r"Greenland", "Green."),
    (r"Grenada", "Gren."),
    (r"Guadeloupe", "Guad."),
    (r"Guatemala", "Guat."),
    (r"Guinea-Bissau", "Guinea-Bissau"),
    (r"Papua New Guinea", "Papua N.G."),
    (r"Guinea", "Guinea"),
    (r"Guyana", "Guy."),
    (r"Haiti", "Haiti"),
    (r"Honduras", "Hond."),
    (r"Hong Kong", "H.K."),
    (r"Hungary", "Hung."),
    (r"Iceland", "Ice."),
    (r"India", "India"),
    (r"Indonesia", "Indon."),
    (r"Iran", "Iran"),
    (r"Iraq", "Iraq"),
    (r"Northern Ireland", "N. Ir."),
    (r"Ireland", "Ir."),
    (r"Israel", "Isr."),
    (r"Italy", "It."),
    (r"Jamaica", "Jam."),
    (r"Japan", "Japan"),
    (r"Jordan", "Jordan"),
    (r"Kazakhstan", "Kaz."),
    (r"Kenya", "Kenya"),
    (r"Kiribati", "Kiribati"),
    (r"Korea, North", "N. Kor."),
    (r"Korea, South", "S. Kor."),
    (r"Kosovo", "Kos."),
    (r"Kuwait", "Kuwait"),
    (r"Kyrgyzstan", "Kyrg."),
    (r"Laos", "Laos"),
    (r"Latvia", "Lat."),
    (r"Lebanon", "Leb."),
    (r"Lesotho", "Lesotho"),
    (r"Liberia", "Liber."),
    (r"Libya", "Libya"),
    (r"Liechtenstein", "Liech."),
    (r"Lithuania", "Lith."),
    (r"Luxembourg", "Lux."),
    (r"Macau", "Mac."),
    (r"Macedonia", "Maced."),
    (r"Madagascar", "Madag."),
    (r"Malawi", "Malawi"),
    (r"Malaysia", "Malay."),
    (r"Maldives", "Maldives"),
    (r"Mali", "Mali"),
    (r"Malta", "Malta"),
    (r"Marshall Islands", "Marsh. Is."),
    (r"Martinique", "Mart."),
    (r"Mauritania", "Mauritania"),
    (r"Mauritius", "Mauritius"),
    (r"Mexico", "Mex."),
    (r"Micronesia", "Micr."),
    (r"Moldova", "Mold."),
    (r"Monaco", "Monaco"),
    (r"Mongolia", "Mong."),
    (r"Montenegro", "Montenegro"),
    (r"Montserrat", "Montserrat"),
    (r"Morocco", "Morocco"),
    (r"Mozambique", "Mozam."),
    (r"Myanmar", "Myan."),
    (r"Namibia", "Namib."),
    (r"Nauru", "Nauru"),
    (r"Nepal", "Nepal"),
    (r"Netherlands", "Neth."),
    (r"New Zealand", "N.Z."),
    (r"Nicaragua", "Nicar."),
    (r"Niger", "Niger"),
    (r"Nigeria", "Nigeria"),
    (r"North America", "N. Am."),
    (r"Norway", "Nor."),
    (r"Oman", "Oman"),
    (r"Pakistan", "Pak."),
    (r"Palau", "Palau"),
    (r"Panama", "Pan."),
    (r"Paraguay", "Para."),
    (r"Peru", "Peru"),
    (r"Philippines", "Phil."),
    (r"Pitcairn Island", "Pitcairn Is."),
    (r"Poland", "Pol."),
    (r"Portugal", "Port."),
    (r"Qatar", "Qatar"),
    (r"Réunion", "Réunion"),
    (r"Romania", "Rom."),
    (r"Russia", "Russ."),
    (r"Rwanda", "Rwanda"),
    (r"Saint Helena", "St. Helena"),
    (r"Saint Kitts & Nevis", "St. Kitts & Nevis"),
    (r"Saint Lucia", "St. Lucia"),
    (r"Saint Vincent & the Grenadines", "St. Vincent"),
    (r"Samoa", "Samoa"),
    (r"San Marino", "San Marino"),
    (r"São Tomé and Príncipe", "São Tomé & Príncipe"),
    (r"Saudi Arabia", "Saudi Arabia"),
    (r"Scotland", "Scot."),
    (r"Senegal", "Sen."),
    (r"Serbia", "Serb."),
    (r"Seychelles", "Sey."),
    (r"Sierra Leone", "Sierra Leone"),
    (r"Singapore", "Sing."),
    (r"Slovakia", "Slovk."),
    (r"Slovenia", "Slovn."),
    (r"Solomon Islands", "Solom. Is."),
    (r"Somalia", "Som."),
    (r"South America", "S. Am."),
    (r"Spain", "Spain"),
    (r"Sri Lanka", "Sri Lanka"),
    (r"Sudan", "Sudan"),
    (r"Suriname", "Surin."),
    (r"Swaziland", "Swaz."),
    (r"Sweden", "Swed."),
    (r"Switzerland", "Switz."),
    (r"Syria", "Syria"),
    (r"Taiwan", "Taiwan"),
    (r"Tajikistan", "Taj."),
    (r"Tanzania", "Tanz."),
    (r"Thailand", "Thai."),
    (r"Timor-Leste|East Timor", "Timor-Leste"),
    (r"Togo", "Togo"),
    (r"Tonga", "Tonga"),
    (r"Trinidad & Tobago", "Trin. & Tobago"),
    (r"Tunisia", "Tunis."),
    (r"Turkey", "Turk."),
    (r"Turkmenistan", "Turkm."),
    (r"Turks & Caicos Islands", "Turks & Caicos Is."),
    (r"Tuvalu", "Tuvalu"),
    (r"Uganda", "Uganda"),
    (r"Ukraine", "Ukr."),
    (r"United Arab Emirates", "U.A.E."),
    (r"United Kingdom", "U.K."),
    (r"United States of America", "U.S."),
    (r"Uruguay", "Uru."),
    (r"Uzbekistan", "Uzb."),
    (r"Vanuatu", "Vanuatu"),
    (r"Vatican City", "Vatican"),
    (r"Venezuela", "Venez."),
    (r"Vietnam", "Viet."),
    (r"Wales", "Wales"),
    (r"Yemen", "Yemen"),
    (r"Zambia", "Zam."),
    (r"Zimbabwe", "Zim."),
];
/// Months.
pub(crate) const MONTHS: &[(&str, &str)] = &[
    (r"January", "Jan."),
    (r"February", "Feb."),
    (r"March", "Mar."),
    (r"April", "Apr."),
    (r"May", "May"),
    (r"June", "June"),
    (r"July", "July"),
    (r"August", "Aug."),
    (r"September", "Sept."),
    (r"October", "Oct."),
    (r"November", "Nov."),
    (r"December", "Dec."),
];
/// Institutional names in periodical titles.
pub(crate) const PERIODICAL_INSTITUTIONS: &[(&str, &str)] = &[
    (r"Adelaide", "Adel."),
    (r"Air Force", "A.F."),
    (r"Albany", "Alb."),
    (r"American Bar Association", "A.B.A."),
    (r"American Intellectual Property Law Association", "AIPLA"),
    (r"American Law Institute", "A.L.I."),
    (r"Journal of the American Medical Association", "JAMA"),
    (r"American Medical Association", "AMA"),
    (r"American Society of Composers, Authors & Publishers", "ASCAP"),
    (r"American University", "Am. U."),
    (r"Boston College", "B.C."),
    (r"Boston University", "B.U."),
    (r"Brigham Young University", "BYU"),
    (r"Brooklyn", "Brook."),
    (r"Buffalo", "Buff."),
    (r"California Law Review", "Calif. L. Rev."),
    (r"Capital", "Cap."),
    (r"Chapman", "Chap."),
    (r"Chartered Life Underwriters", "C.L.U."),
    (r"Cincinnati", "Cin."),
    (r"City University of New York", "CUNY"),
    (r"Cleveland", "Clev."),
    (r"University of the District of Columbia, David A\. Clarke School of Law", "UDC/DCSL"),
    (r"Columbia", "Colum."),
    (r"Cumberland", "Cumb."),
    (r"Denver", "Denv."),
    (r"Detroit", "Det."),
    (r"Dickinson", "Dick."),
    (r"Duquesne", "Duq."),
    (r"East(?:ern)?", "E."),
    (r"Florida International University", "FIU"),
    (r"Foreign Broadcast Information Service", "F.B.I.S."),
    (r"George Mason", "Geo. Mason"),
    (r"George Washington", "Geo. Wash."),
    (r"Georgetown", "Geo."),
    (r"Gonzaga", "Gonz."),
    (r"Harvard", "Harv."),
    (r"Howard", "How."),
    (r"John Marshall", "J. Marshall"),
    (r"Judge Advocate General(?:'s)?", "JAG"),
    (r"Las Vegas", "L.V."),
    (r"Lawyers Reports Annotated", "L.R.A."),
    (r"Loyola", "Loy."),
    (r"Marquette", "Marq."),
    (r"Melbourne", "Melb."),
    (r"Memphis", "Mem."),
    (r"New England", "New Eng."),
    (r"New York University(?: School of Law)?", "N.Y.U."),
    (r"North(?:ern)?", "N."),
    (r"Northeast(?:ern)?", "Ne."),
    (r"Northwest(?:ern)?", "Nw."),
    (r"Pepperdine", "Pepp."),
    (r"Pittsburgh", "Pitt."),
    (r"Richmond", "Rich."),
    (r"Rocky Mountain Mineral Law Institute", "Rocky Mtn. Min. L. Inst."),
    (r"Saint Louis", "St. Louis"),
    (r"San Fernando Valley", "San Fern. V."),
    (r"Southern Methodist University", "SMU"),
    (r"South(?:ern)?", "S."),
    (r"Southeast(?:ern)?", "Se."),
    (r"Southwest(?:ern)?", "Sw."),
    (r"Stanford", "Stan."),
    (r"State", "St."),
    (r"Temple", "Temp."),
    (r"Thomas Jefferson", "T. Jefferson"),
    (r"Thomas M\. Cooley", "T.M. Cooley"),
    (r"Thurgood Marshall", "T. Marshall"),
    (r"Toledo", "Tol."),
    (r"Tulane", "Tul."),
    (r"Universidad de Puerto Rico", "U. P.R."),
    (r"University of California - Los Angeles", "UCLA"),
    (r"University of California", "U.C."),
    (r"University of Missouri Kansas City", "UMKC"),
    (r"University of West Los Angeles", "UWLA"),
    (r"Valparaiso", "Val."),
    (r"Vanderbilt", "Vand."),
    (r"Villanova", "Vill."),
    (r"Washington & Lee", "Wash. & Lee"),
    (r"West(?:ern)?", "W."),
    (r"William & Mary", "Wm. & Mary"),
    (r"William Mitchell", "Wm. Mitchell"),
];
/// Terms whose presence in a periodical title marks it as a law journal.
pub(crate) const LAW_JOURNAL_TERMS: &[&str] = &[
    r"bankruptcy",
    r"bar",
    r"bill of rights",
    r"circuit",
    r"civil (libert(y|ies)|right(?:s)?)",
    r"constitution(?:al)?",
    r"court(?:s)?",
    r"dispute(?:s)?",
    r"intellectual",
    r"justice",
    r"law",
    r"legal",
    r"legislation",
    r"litigation",
    r"national security",
    r"patent",
    r"regulation",
    r"tax",
    r"trademark",
];
